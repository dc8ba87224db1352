pub mod request {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    fn validate_window(body: &Body) -> Result<(), ValidationError> {
        match body.start_date <= body.end_date {
            true => Ok(()),
            false => Err(ValidationError::new("INVALID_TIME_RANGE")
                .with_message(Cow::from("Start date must not be after end date"))),
        }
    }

    #[derive(Deserialize, Validate)]
    #[validate(schema(function = "validate_window"))]
    pub struct Body {
        #[validate(length(min = 2, max = 100))]
        pub name: String,
        #[validate(length(min = 2, max = 100))]
        pub category: String,
        pub start_date: DateTime<Utc>,
        pub end_date: DateTime<Utc>,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::menu::repository::Menu,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        MenuCreated(Menu),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuCreated(menu) => {
                    response::success(StatusCode::CREATED, "Menu created successfully", menu)
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateMenu,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::FailedToCreateMenu => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create menu",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
