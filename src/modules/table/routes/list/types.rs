pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub pagination: Pagination,
    }
}

pub mod response {
    use crate::{
        modules::table::repository::Table,
        utils::{pagination::Paginated, response},
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Tables(Paginated<Table>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Tables(tables) => (StatusCode::OK, Json(json!(tables))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchTables,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchTables => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch tables",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
