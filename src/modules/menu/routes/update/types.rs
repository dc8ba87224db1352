pub mod request {
    pub use crate::modules::menu::repository::UpdateMenuPayload as Body;

    pub struct Payload {
        pub menu_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::menu::repository::Menu,
        utils::{response, update, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        MenuUpdated(Menu),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuUpdated(menu) => {
                    response::success(StatusCode::OK, "Menu updated successfully", menu)
                }
            }
        }
    }

    pub enum Error {
        MissingMenuId,
        FailedToValidate(ValidationErrors),
        InvalidTimeRange,
        InvertedTimeRange,
        NoFieldsToUpdate,
        MenuNotFound,
        FailedToUpdateMenu,
    }

    impl From<update::Error> for Error {
        fn from(err: update::Error) -> Self {
            match err {
                update::Error::MissingKey => Self::MissingMenuId,
                update::Error::Validation(errors) => Self::FailedToValidate(errors),
                update::Error::EmptyUpdate => Self::NoFieldsToUpdate,
                update::Error::NotFound => Self::MenuNotFound,
                _ => Self::FailedToUpdateMenu,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingMenuId => {
                    response::error(StatusCode::BAD_REQUEST, "Menu id is required")
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::InvalidTimeRange => response::error(
                    StatusCode::BAD_REQUEST,
                    "Invalid time range: current time not in between start and end date",
                ),
                Self::InvertedTimeRange => response::error(
                    StatusCode::BAD_REQUEST,
                    "Start date must not be after end date",
                ),
                Self::NoFieldsToUpdate => {
                    response::error(StatusCode::BAD_REQUEST, "No fields to update")
                }
                Self::MenuNotFound => response::error(StatusCode::NOT_FOUND, "Menu not found"),
                Self::FailedToUpdateMenu => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update menu",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
