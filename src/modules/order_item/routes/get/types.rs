pub mod request {
    pub struct Payload {
        pub order_item_id: String,
    }
}

pub mod response {
    use crate::{modules::order_item::repository::OrderItem, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        OrderItem(OrderItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderItem(order_item) => response::success(
                    StatusCode::OK,
                    "Order item retrieved successfully",
                    order_item,
                ),
            }
        }
    }

    pub enum Error {
        OrderItemNotFound,
        FailedToFetchOrderItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderItemNotFound => {
                    response::error(StatusCode::NOT_FOUND, "Order item not found")
                }
                Self::FailedToFetchOrderItem => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch order item",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
