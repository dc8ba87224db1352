pub mod food;
pub mod invoice;
pub mod menu;
pub mod note;
pub mod order;
pub mod order_item;
pub mod table;
pub mod user;

mod router;
pub use router::get_router;
