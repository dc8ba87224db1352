use super::types::{request, response};
use crate::{modules::order_item::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::update_by_id(&ctx.db, payload.order_item_id.clone(), payload.body).await?;

    repository::find_by_id(&ctx.db, payload.order_item_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderItem)?
        .ok_or(response::Error::OrderItemNotFound)
        .map(response::Success::OrderItemUpdated)
}
