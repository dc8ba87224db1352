pub mod request {
    use crate::utils::validation;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 2, max = 100))]
        pub name: String,
        #[validate(range(min = 0.0))]
        pub price: f64,
        #[validate(length(min = 1, max = 500))]
        pub food_image: String,
        #[validate(custom(function = "validation::not_blank"))]
        pub menu_id: String,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::food::repository::Food,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        FoodCreated(Food),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FoodCreated(food) => {
                    response::success(StatusCode::CREATED, "Food created successfully", food)
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        MenuNotFound,
        FailedToCreateFood,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::MenuNotFound => response::error(StatusCode::NOT_FOUND, "Menu not found"),
                Self::FailedToCreateFood => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create food",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
