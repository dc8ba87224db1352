pub mod request {
    pub struct Payload {
        pub table_id: String,
    }
}

pub mod response {
    use crate::{modules::table::repository::Table, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Table(Table),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Table(table) => {
                    response::success(StatusCode::OK, "Table retrieved successfully", table)
                }
            }
        }
    }

    pub enum Error {
        TableNotFound,
        FailedToFetchTable,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableNotFound => response::error(StatusCode::NOT_FOUND, "Table not found"),
                Self::FailedToFetchTable => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch table",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
