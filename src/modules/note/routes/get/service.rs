use super::types::{request, response};
use crate::{modules::note::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(&ctx.db, payload.note_id)
        .await
        .map_err(|_| response::Error::FailedToFetchNote)?
        .ok_or(response::Error::NoteNotFound)
        .map(response::Success::Note)
}
