use super::types::{request, response};
use crate::{
    modules::{food, order, order_item::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    order::repository::find_by_id(&ctx.db, payload.body.order_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateOrderItem)?
        .ok_or(response::Error::OrderNotFound)?;

    food::repository::find_by_id(&ctx.db, payload.body.food_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateOrderItem)?
        .ok_or(response::Error::FoodNotFound)?;

    repository::create(
        &ctx.db,
        repository::CreateOrderItemPayload {
            order_id: payload.body.order_id,
            food_id: payload.body.food_id,
            quantity: payload.body.quantity,
            unit_price: payload.body.unit_price,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrderItem)
    .map(response::Success::OrderItemCreated)
}
