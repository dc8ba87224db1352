use super::types::{request, response};
use crate::{
    modules::{food::repository, menu},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    menu::repository::find_by_id(&ctx.db, payload.body.menu_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateFood)?
        .ok_or(response::Error::MenuNotFound)?;

    repository::create(
        &ctx.db,
        repository::CreateFoodPayload {
            name: payload.body.name,
            price: payload.body.price,
            food_image: payload.body.food_image,
            menu_id: payload.body.menu_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateFood)
    .map(response::Success::FoodCreated)
}
