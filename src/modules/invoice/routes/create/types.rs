pub mod request {
    use crate::{
        modules::invoice::repository::{PaymentMethod, PaymentStatus},
        utils::validation,
    };
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(function = "validation::not_blank"))]
        pub order_id: String,
        pub payment_method: Option<PaymentMethod>,
        pub payment_status: Option<PaymentStatus>,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::invoice::repository::Invoice,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        InvoiceCreated(Invoice),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvoiceCreated(invoice) => response::success(
                    StatusCode::CREATED,
                    "Invoice created successfully",
                    invoice,
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        OrderNotFound,
        FailedToCreateInvoice,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::OrderNotFound => response::error(StatusCode::NOT_FOUND, "Order not found"),
                Self::FailedToCreateInvoice => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create invoice",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
