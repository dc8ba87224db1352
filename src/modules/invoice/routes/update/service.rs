use super::types::{request, response};
use crate::{modules::invoice::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::update_by_id(&ctx.db, payload.invoice_id.clone(), payload.body).await?;

    repository::find_by_id(&ctx.db, payload.invoice_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateInvoice)?
        .ok_or(response::Error::InvoiceNotFound)
        .map(response::Success::InvoiceUpdated)
}
