pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1))]
        pub table_id: Option<String>,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::order::repository::Order,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    response::success(StatusCode::CREATED, "Order created successfully", order)
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        TableNotFound,
        FailedToCreateOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::TableNotFound => response::error(StatusCode::NOT_FOUND, "Table not found"),
                Self::FailedToCreateOrder => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create order",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
