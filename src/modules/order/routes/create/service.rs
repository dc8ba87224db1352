use super::types::{request, response};
use crate::{
    modules::{order::repository, table},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if let Some(table_id) = payload.body.table_id.clone() {
        table::repository::find_by_id(&ctx.db, table_id)
            .await
            .map_err(|_| response::Error::FailedToCreateOrder)?
            .ok_or(response::Error::TableNotFound)?;
    }

    repository::create(
        &ctx.db,
        repository::CreateOrderPayload {
            table_id: payload.body.table_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)
    .map(response::Success::OrderCreated)
}
