pub mod request {
    pub use crate::modules::invoice::repository::UpdateInvoicePayload as Body;

    pub struct Payload {
        pub invoice_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::invoice::repository::Invoice,
        utils::{response, update, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        InvoiceUpdated(Invoice),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvoiceUpdated(invoice) => {
                    response::success(StatusCode::OK, "Invoice updated successfully", invoice)
                }
            }
        }
    }

    pub enum Error {
        MissingInvoiceId,
        FailedToValidate(ValidationErrors),
        NoFieldsToUpdate,
        InvoiceNotFound,
        OrderNotFound,
        FailedToUpdateInvoice,
    }

    impl From<update::Error> for Error {
        fn from(err: update::Error) -> Self {
            match err {
                update::Error::MissingKey => Self::MissingInvoiceId,
                update::Error::Validation(errors) => Self::FailedToValidate(errors),
                update::Error::EmptyUpdate => Self::NoFieldsToUpdate,
                update::Error::NotFound => Self::InvoiceNotFound,
                update::Error::ReferenceNotFound(_) => Self::OrderNotFound,
                _ => Self::FailedToUpdateInvoice,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingInvoiceId => {
                    response::error(StatusCode::BAD_REQUEST, "Invoice id is required")
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::NoFieldsToUpdate => {
                    response::error(StatusCode::BAD_REQUEST, "No fields to update")
                }
                Self::InvoiceNotFound => {
                    response::error(StatusCode::NOT_FOUND, "Invoice not found")
                }
                Self::OrderNotFound => response::error(StatusCode::NOT_FOUND, "Order not found"),
                Self::FailedToUpdateInvoice => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update invoice",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
