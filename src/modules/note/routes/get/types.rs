pub mod request {
    pub struct Payload {
        pub note_id: String,
    }
}

pub mod response {
    use crate::{modules::note::repository::Note, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Note(Note),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Note(note) => {
                    response::success(StatusCode::OK, "Note retrieved successfully", note)
                }
            }
        }
    }

    pub enum Error {
        NoteNotFound,
        FailedToFetchNote,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NoteNotFound => response::error(StatusCode::NOT_FOUND, "Note not found"),
                Self::FailedToFetchNote => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch note",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
