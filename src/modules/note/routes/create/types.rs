pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 2, max = 100))]
        pub title: String,
        #[validate(length(min = 2, max = 1000))]
        pub text: String,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::note::repository::Note,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        NoteCreated(Note),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NoteCreated(note) => {
                    response::success(StatusCode::CREATED, "Note created successfully", note)
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateNote,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::FailedToCreateNote => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create note",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
