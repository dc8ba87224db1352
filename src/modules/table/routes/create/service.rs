use super::types::{request, response};
use crate::{modules::table::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(
        &ctx.db,
        repository::CreateTablePayload {
            number_of_guests: payload.body.number_of_guests,
            table_number: payload.body.table_number,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateTable)
    .map(response::Success::TableCreated)
}
