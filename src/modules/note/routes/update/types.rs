pub mod request {
    pub use crate::modules::note::repository::UpdateNotePayload as Body;

    pub struct Payload {
        pub note_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::note::repository::Note,
        utils::{response, update, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        NoteUpdated(Note),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NoteUpdated(note) => {
                    response::success(StatusCode::OK, "Note updated successfully", note)
                }
            }
        }
    }

    pub enum Error {
        MissingNoteId,
        FailedToValidate(ValidationErrors),
        NoFieldsToUpdate,
        NoteNotFound,
        FailedToUpdateNote,
    }

    impl From<update::Error> for Error {
        fn from(err: update::Error) -> Self {
            match err {
                update::Error::MissingKey => Self::MissingNoteId,
                update::Error::Validation(errors) => Self::FailedToValidate(errors),
                update::Error::EmptyUpdate => Self::NoFieldsToUpdate,
                update::Error::NotFound => Self::NoteNotFound,
                _ => Self::FailedToUpdateNote,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingNoteId => {
                    response::error(StatusCode::BAD_REQUEST, "Note id is required")
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::NoFieldsToUpdate => {
                    response::error(StatusCode::BAD_REQUEST, "No fields to update")
                }
                Self::NoteNotFound => response::error(StatusCode::NOT_FOUND, "Note not found"),
                Self::FailedToUpdateNote => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update note",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
