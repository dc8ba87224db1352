pub mod repository;
mod routes;

pub use routes::{get_order_router, get_router};
