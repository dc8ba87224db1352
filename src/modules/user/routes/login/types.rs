pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(min = 1))]
        pub password: String,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::user::repository::User,
        utils::{auth::TokenPair, response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        LoggedIn { user: User, tokens: TokenPair },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedIn { user, tokens } => response::success(
                    StatusCode::OK,
                    "Login successful",
                    json!({
                        "user": user,
                        "token": tokens.access,
                        "refresh_token": tokens.refresh,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidCredentials,
        FailedToFetchUser,
        FailedToIssueTokens,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::InvalidCredentials => {
                    response::error(StatusCode::UNAUTHORIZED, "Invalid email or password")
                }
                Self::FailedToFetchUser => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch user",
                ),
                Self::FailedToIssueTokens => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to issue tokens",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
