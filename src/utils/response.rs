use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

pub fn success<T: Serialize>(status: StatusCode, message: &str, data: T) -> Response {
    (
        status,
        Json(json!({
            "status": status.as_u16(),
            "message": message,
            "data": data,
        })),
    )
        .into_response()
}

pub fn message(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "status": status.as_u16(), "message": message })),
    )
        .into_response()
}

pub fn error(status: StatusCode, error: &str) -> Response {
    (
        status,
        Json(json!({ "status": status.as_u16(), "error": error })),
    )
        .into_response()
}
