pub mod request {
    pub use crate::modules::food::repository::UpdateFoodPayload as Body;

    pub struct Payload {
        pub food_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::food::repository::Food,
        utils::{response, update, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        FoodUpdated(Food),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FoodUpdated(food) => {
                    response::success(StatusCode::OK, "Food updated successfully", food)
                }
            }
        }
    }

    pub enum Error {
        MissingFoodId,
        FailedToValidate(ValidationErrors),
        NoFieldsToUpdate,
        FoodNotFound,
        MenuNotFound,
        MenuNotActive,
        FailedToUpdateFood,
    }

    impl From<update::Error> for Error {
        fn from(err: update::Error) -> Self {
            match err {
                update::Error::MissingKey => Self::MissingFoodId,
                update::Error::Validation(errors) => Self::FailedToValidate(errors),
                update::Error::EmptyUpdate => Self::NoFieldsToUpdate,
                update::Error::NotFound => Self::FoodNotFound,
                update::Error::ReferenceNotFound(_) => Self::MenuNotFound,
                update::Error::ReferenceNotActive(_) => Self::MenuNotActive,
                update::Error::Database(_) => Self::FailedToUpdateFood,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingFoodId => {
                    response::error(StatusCode::BAD_REQUEST, "Food id is required")
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::NoFieldsToUpdate => {
                    response::error(StatusCode::BAD_REQUEST, "No fields to update")
                }
                Self::FoodNotFound => response::error(StatusCode::NOT_FOUND, "Food not found"),
                Self::MenuNotFound => response::error(StatusCode::NOT_FOUND, "Menu not found"),
                Self::MenuNotActive => {
                    response::error(StatusCode::BAD_REQUEST, "Menu is not active")
                }
                Self::FailedToUpdateFood => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update food",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
