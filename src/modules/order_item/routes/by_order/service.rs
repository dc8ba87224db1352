use super::types::{request, response};
use crate::{modules::order_item::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_order_id(&ctx.db, payload.order_id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrderItems)
        .map(response::Success::OrderItems)
}
