pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub pagination: Pagination,
    }
}

pub mod response {
    use crate::{
        modules::note::repository::Note,
        utils::{pagination::Paginated, response},
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Notes(Paginated<Note>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Notes(notes) => (StatusCode::OK, Json(json!(notes))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchNotes,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchNotes => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch notes",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
