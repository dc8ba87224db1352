use super::types::{request, response};
use crate::{
    modules::{invoice::repository, order},
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
        .map_err(|_| response::Error::FailedToCreateInvoice)?
        .ok_or(response::Error::OrderNotFound)?;

    repository::create(
        &ctx.db,
        repository::CreateInvoicePayload {
            order_id: payload.body.order_id,
            payment_method: payload.body.payment_method,
            payment_status: payload.body.payment_status,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateInvoice)
    .map(response::Success::InvoiceCreated)
}
