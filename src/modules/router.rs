use super::{food, invoice, menu, note, order, order_item, table, user};
use crate::{types::Context, utils::response};
use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    response::message(StatusCode::OK, "Welcome to the restaurant management API")
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/foods", food::get_router())
        .nest("/menus", menu::get_router())
        .nest("/tables", table::get_router())
        .nest("/orders", order::get_router())
        .nest("/orderItems", order_item::get_router())
        .nest("/orderItems-order", order_item::get_order_router())
        .nest("/invoices", invoice::get_router())
        .nest("/notes", note::get_router())
        .nest("/users", user::get_router())
}
