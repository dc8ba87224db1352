pub mod auth;
pub mod database;
pub mod extract;
pub mod field;
pub mod pagination;
pub mod response;
pub mod update;
pub mod validation;
