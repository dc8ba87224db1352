mod by_order;
mod create;
mod get;
mod list;
mod update;

use crate::types::Context;
use axum::routing::{self, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", routing::get(list::handler).post(create::handler))
        .route(
            "/:order_item_id",
            routing::get(get::handler).patch(update::handler),
        )
}

/// Items of a single order, mounted apart from the collection routes.
pub fn get_order_router() -> Router<Arc<Context>> {
    Router::new().route("/:order_id", routing::get(by_order::handler))
}
