pub mod connection;
pub mod migrate;
pub mod query;
pub mod schema;

pub use connection::{DbConnection, DbPool, DbProvider};
