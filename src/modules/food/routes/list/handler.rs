use super::{service::service, types::request};
use crate::{types::Context, utils::pagination::Pagination};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, pagination: Pagination) -> impl IntoResponse {
    service(ctx, request::Payload { pagination }).await
}
