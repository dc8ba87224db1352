pub mod request {
    pub use crate::modules::order::repository::UpdateOrderPayload as Body;

    pub struct Payload {
        pub order_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::order::repository::Order,
        utils::{response, update, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        OrderUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderUpdated(order) => {
                    response::success(StatusCode::OK, "Order updated successfully", order)
                }
            }
        }
    }

    pub enum Error {
        MissingOrderId,
        FailedToValidate(ValidationErrors),
        NoFieldsToUpdate,
        OrderNotFound,
        TableNotFound,
        FailedToUpdateOrder,
    }

    impl From<update::Error> for Error {
        fn from(err: update::Error) -> Self {
            match err {
                update::Error::MissingKey => Self::MissingOrderId,
                update::Error::Validation(errors) => Self::FailedToValidate(errors),
                update::Error::EmptyUpdate => Self::NoFieldsToUpdate,
                update::Error::NotFound => Self::OrderNotFound,
                update::Error::ReferenceNotFound(_) => Self::TableNotFound,
                _ => Self::FailedToUpdateOrder,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingOrderId => {
                    response::error(StatusCode::BAD_REQUEST, "Order id is required")
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::NoFieldsToUpdate => {
                    response::error(StatusCode::BAD_REQUEST, "No fields to update")
                }
                Self::OrderNotFound => response::error(StatusCode::NOT_FOUND, "Order not found"),
                Self::TableNotFound => response::error(StatusCode::NOT_FOUND, "Table not found"),
                Self::FailedToUpdateOrder => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update order",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
