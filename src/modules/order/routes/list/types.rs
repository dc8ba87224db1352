pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub pagination: Pagination,
    }
}

pub mod response {
    use crate::{
        modules::order::repository::Order,
        utils::{pagination::Paginated, response},
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Orders(Paginated<Order>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Orders(orders) => (StatusCode::OK, Json(json!(orders))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchOrders,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOrders => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch orders",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
