pub mod request {
    pub use crate::modules::table::repository::UpdateTablePayload as Body;

    pub struct Payload {
        pub table_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::table::repository::Table,
        utils::{response, update, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        TableUpdated(Table),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableUpdated(table) => {
                    response::success(StatusCode::OK, "Table updated successfully", table)
                }
            }
        }
    }

    pub enum Error {
        MissingTableId,
        FailedToValidate(ValidationErrors),
        NoFieldsToUpdate,
        TableNotFound,
        FailedToUpdateTable,
    }

    impl From<update::Error> for Error {
        fn from(err: update::Error) -> Self {
            match err {
                update::Error::MissingKey => Self::MissingTableId,
                update::Error::Validation(errors) => Self::FailedToValidate(errors),
                update::Error::EmptyUpdate => Self::NoFieldsToUpdate,
                update::Error::NotFound => Self::TableNotFound,
                _ => Self::FailedToUpdateTable,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingTableId => {
                    response::error(StatusCode::BAD_REQUEST, "Table id is required")
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::NoFieldsToUpdate => {
                    response::error(StatusCode::BAD_REQUEST, "No fields to update")
                }
                Self::TableNotFound => response::error(StatusCode::NOT_FOUND, "Table not found"),
                Self::FailedToUpdateTable => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update table",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
