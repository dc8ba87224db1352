pub mod request {
    pub struct Payload {
        pub invoice_id: String,
    }
}

pub mod response {
    use crate::{modules::invoice::repository::InvoiceView, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Invoice(InvoiceView),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Invoice(invoice) => {
                    response::success(StatusCode::OK, "Invoice retrieved successfully", invoice)
                }
            }
        }
    }

    pub enum Error {
        InvoiceNotFound,
        FailedToFetchInvoice,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvoiceNotFound => {
                    response::error(StatusCode::NOT_FOUND, "Invoice not found")
                }
                Self::FailedToFetchInvoice => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch invoice",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
