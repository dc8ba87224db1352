pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub pagination: Pagination,
    }
}

pub mod response {
    use crate::{
        modules::order_item::repository::OrderItem,
        utils::{pagination::Paginated, response},
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderItems(Paginated<OrderItem>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderItems(order_items) => {
                    (StatusCode::OK, Json(json!(order_items))).into_response()
                }
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
