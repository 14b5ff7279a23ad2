pub mod auth;
pub mod error;
pub mod import;
pub mod store;
