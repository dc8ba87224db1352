use axum::{
    async_trait,
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// JSON body extractor that reports malformed payloads with the shared error
/// envelope instead of axum's plain-text rejection.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => Ok(Self(body)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "status": StatusCode::BAD_REQUEST.as_u16(),
                        "error": "Invalid JSON payload",
                        "details": rejection.body_text(),
                    })),
                )
                    .into_response())
            }
        }
    }
}
