pub mod request {
    pub struct Payload {
        pub order_id: String,
    }
}

pub mod response {
    use crate::{modules::order_item::repository::OrderItem, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        OrderItems(Vec<OrderItem>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderItems(order_items) => response::success(
                    StatusCode::OK,
                    "Order items retrieved successfully",
                    order_items,
                ),
            }
        }
    }

    pub enum Error {
        FailedToFetchOrderItems,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOrderItems => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch order items",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
