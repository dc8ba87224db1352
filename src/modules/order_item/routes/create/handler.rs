use super::{service::service, types::request};
use crate::{types::Context, utils::extract::JsonBody};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    JsonBody(body): JsonBody<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { body }).await
}
