use super::types::{request, response};
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::update_by_id(&ctx.db, payload.order_id.clone(), payload.body).await?;

    repository::find_by_id(&ctx.db, payload.order_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrder)?
        .ok_or(response::Error::OrderNotFound)
        .map(response::Success::OrderUpdated)
}
