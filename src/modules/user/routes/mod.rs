mod get;
mod list;
mod login;
mod signup;

use crate::types::Context;
use axum::routing::{self, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", routing::get(list::handler))
        .route("/signup", routing::post(signup::handler))
        .route("/login", routing::post(login::handler))
        .route("/:user_id", routing::get(get::handler))
}
