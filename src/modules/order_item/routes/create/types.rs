pub mod request {
    use crate::utils::validation;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(function = "validation::not_blank"))]
        pub order_id: String,
        #[validate(custom(function = "validation::not_blank"))]
        pub food_id: String,
        #[validate(range(min = 1))]
        pub quantity: i64,
        #[validate(range(min = 0.0))]
        pub unit_price: f64,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::order_item::repository::OrderItem,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        OrderItemCreated(OrderItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderItemCreated(order_item) => response::success(
                    StatusCode::CREATED,
                    "Order item created successfully",
                    order_item,
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        OrderNotFound,
        FoodNotFound,
        FailedToCreateOrderItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::OrderNotFound => response::error(StatusCode::NOT_FOUND, "Order not found"),
                Self::FoodNotFound => response::error(StatusCode::NOT_FOUND, "Food not found"),
                Self::FailedToCreateOrderItem => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create order item",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
