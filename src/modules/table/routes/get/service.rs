use super::types::{request, response};
use crate::{modules::table::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(&ctx.db, payload.table_id)
        .await
        .map_err(|_| response::Error::FailedToFetchTable)?
        .ok_or(response::Error::TableNotFound)
        .map(response::Success::Table)
}
