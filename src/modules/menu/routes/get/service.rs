use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(&ctx.db, payload.menu_id)
        .await
        .map_err(|_| response::Error::FailedToFetchMenu)?
        .ok_or(response::Error::MenuNotFound)
        .map(response::Success::Menu)
}
