use super::types::{request, response};
use crate::{
    modules::{
        invoice::repository::{self, InvoiceView},
        order, order_item, table,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let invoice = repository::find_by_id(&ctx.db, payload.invoice_id)
        .await
        .map_err(|_| response::Error::FailedToFetchInvoice)?
        .ok_or(response::Error::InvoiceNotFound)?;

    let table_id = order::repository::find_by_id(&ctx.db, invoice.order_id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchInvoice)?
        .and_then(|order| order.table_id);

    let table_number = match table_id {
        Some(table_id) => table::repository::find_by_id(&ctx.db, table_id)
            .await
            .map_err(|_| response::Error::FailedToFetchInvoice)?
            .map(|table| table.table_number),
        None => None,
    };

    let order_details =
        order_item::repository::find_enriched_by_order_id(&ctx.db, invoice.order_id.clone())
            .await
            .map_err(|_| response::Error::FailedToFetchInvoice)?;

    Ok(response::Success::Invoice(InvoiceView::new(
        invoice,
        table_number,
        order_details,
    )))
}
