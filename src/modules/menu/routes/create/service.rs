use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(
        &ctx.db,
        repository::CreateMenuPayload {
            name: payload.body.name,
            category: payload.body.category,
            start_date: payload.body.start_date,
            end_date: payload.body.end_date,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateMenu)
    .map(response::Success::MenuCreated)
}
