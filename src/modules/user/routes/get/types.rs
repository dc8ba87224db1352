pub mod request {
    pub struct Payload {
        pub user_id: String,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        User(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::User(user) => {
                    response::success(StatusCode::OK, "User retrieved successfully", user)
                }
            }
        }
    }

    pub enum Error {
        UserNotFound,
        FailedToFetchUser,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserNotFound => response::error(StatusCode::NOT_FOUND, "User not found"),
                Self::FailedToFetchUser => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch user",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
