pub mod request {
    pub struct Payload {
        pub food_id: String,
    }
}

pub mod response {
    use crate::{modules::food::repository::Food, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Food(Food),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Food(food) => {
                    response::success(StatusCode::OK, "Food retrieved successfully", food)
                }
            }
        }
    }

    pub enum Error {
        FoodNotFound,
        FailedToFetchFood,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FoodNotFound => response::error(StatusCode::NOT_FOUND, "Food not found"),
                Self::FailedToFetchFood => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch food",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
