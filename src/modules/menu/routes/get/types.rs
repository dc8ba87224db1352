pub mod request {
    pub struct Payload {
        pub menu_id: String,
    }
}

pub mod response {
    use crate::{modules::menu::repository::Menu, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Menu(Menu),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Menu(menu) => {
                    response::success(StatusCode::OK, "Menu retrieved successfully", menu)
                }
            }
        }
    }

    pub enum Error {
        MenuNotFound,
        FailedToFetchMenu,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuNotFound => response::error(StatusCode::NOT_FOUND, "Menu not found"),
                Self::FailedToFetchMenu => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch menu",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
