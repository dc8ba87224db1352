use super::types::{request, response};
use crate::{modules::food::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::update_by_id(&ctx.db, payload.food_id.clone(), payload.body).await?;

    repository::find_by_id(&ctx.db, payload.food_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateFood)?
        .ok_or(response::Error::FoodNotFound)
        .map(response::Success::FoodUpdated)
}
