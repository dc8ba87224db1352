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
            "/:note_id",
            routing::get(get::handler).patch(update::handler),
        )
}
