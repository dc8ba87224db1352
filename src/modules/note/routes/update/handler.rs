use super::{service::service, types::request};
use crate::{types::Context, utils::extract::JsonBody};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(note_id): Path<String>,
    JsonBody(body): JsonBody<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { note_id, body }).await
}
