use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many(&ctx.db, payload.pagination)
        .await
        .map_err(|_| response::Error::FailedToFetchMenus)
        .map(response::Success::Menus)
}
