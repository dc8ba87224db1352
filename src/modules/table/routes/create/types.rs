pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(range(min = 1, max = 100))]
        pub number_of_guests: i64,
        #[validate(range(min = 1))]
        pub table_number: i64,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::table::repository::Table,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        TableCreated(Table),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableCreated(table) => {
                    response::success(StatusCode::CREATED, "Table created successfully", table)
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateTable,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::FailedToCreateTable => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create table",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
