pub mod request {
    pub struct Payload {
        pub order_id: String,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Order(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Order(order) => {
                    response::success(StatusCode::OK, "Order retrieved successfully", order)
                }
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        FailedToFetchOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => response::error(StatusCode::NOT_FOUND, "Order not found"),
                Self::FailedToFetchOrder => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch order",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
