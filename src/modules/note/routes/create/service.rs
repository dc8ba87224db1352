use super::types::{request, response};
use crate::{modules::note::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(
        &ctx.db,
        repository::CreateNotePayload {
            title: payload.body.title,
            text: payload.body.text,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateNote)
    .map(response::Success::NoteCreated)
}
