pub mod request {
    pub use crate::modules::order_item::repository::UpdateOrderItemPayload as Body;

    pub struct Payload {
        pub order_item_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::order_item::repository::OrderItem,
        utils::{database::Collection, response, update, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        OrderItemUpdated(OrderItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderItemUpdated(order_item) => response::success(
                    StatusCode::OK,
                    "Order item updated successfully",
                    order_item,
                ),
            }
        }
    }

    pub enum Error {
        MissingOrderItemId,
        FailedToValidate(ValidationErrors),
        NoFieldsToUpdate,
        OrderItemNotFound,
        OrderNotFound,
        FoodNotFound,
        FailedToUpdateOrderItem,
    }

    impl From<update::Error> for Error {
        fn from(err: update::Error) -> Self {
            match err {
                update::Error::MissingKey => Self::MissingOrderItemId,
                update::Error::Validation(errors) => Self::FailedToValidate(errors),
                update::Error::EmptyUpdate => Self::NoFieldsToUpdate,
                update::Error::NotFound => Self::OrderItemNotFound,
                update::Error::ReferenceNotFound(Collection::Orders) => Self::OrderNotFound,
                update::Error::ReferenceNotFound(_) => Self::FoodNotFound,
                _ => Self::FailedToUpdateOrderItem,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingOrderItemId => {
                    response::error(StatusCode::BAD_REQUEST, "Order item id is required")
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::NoFieldsToUpdate => {
                    response::error(StatusCode::BAD_REQUEST, "No fields to update")
                }
                Self::OrderItemNotFound => {
                    response::error(StatusCode::NOT_FOUND, "Order item not found")
                }
                Self::OrderNotFound => response::error(StatusCode::NOT_FOUND, "Order not found"),
                Self::FoodNotFound => response::error(StatusCode::NOT_FOUND, "Food not found"),
                Self::FailedToUpdateOrderItem => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update order item",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
