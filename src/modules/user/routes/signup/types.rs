pub mod request {
    use crate::utils::validation;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 2, max = 100))]
        pub first_name: String,
        #[validate(length(min = 2, max = 100))]
        pub last_name: String,
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(min = 6, max = 128))]
        pub password: String,
        #[validate(custom(code = "INVALID_PHONE_NUMBER", function = "validation::phone_number"))]
        pub phone: String,
        #[validate(url)]
        pub avatar: Option<String>,
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
        SignedUp { user: User, tokens: TokenPair },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedUp { user, tokens } => response::success(
                    StatusCode::CREATED,
                    "User created successfully",
                    json!({
                        "user": user,
                        "token": tokens.access,
                        "refresh_token": tokens.refresh,
                    }),
                ),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        EmailAlreadyInUse,
        PhoneNumberAlreadyInUse,
        FailedToHashPassword,
        FailedToIssueTokens,
        SignupFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::FailedToFetchUser => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch user",
                ),
                Self::EmailAlreadyInUse => {
                    response::error(StatusCode::CONFLICT, "Email already in use")
                }
                Self::PhoneNumberAlreadyInUse => {
                    response::error(StatusCode::CONFLICT, "Phone number already in use")
                }
                Self::FailedToHashPassword | Self::FailedToIssueTokens | Self::SignupFailed => {
                    response::error(StatusCode::INTERNAL_SERVER_ERROR, "Sign up failed")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
