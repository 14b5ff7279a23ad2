use std::time::Duration;

use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use futures::future::BoxFuture;

use crate::error::DbResult;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection<'pool> = PooledConnection<'pool, AsyncPgConnection>;

/// How long a request waits for a free pooled connection.
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(10);

/// Hands out pooled connections.
pub trait DbProvider: Send + Sync {
    fn get_connection(&self) -> BoxFuture<'_, DbResult<DbConnection<'_>>>;
}

impl DbProvider for DbPool {
    #[tracing::instrument(skip(self))]
    fn get_connection(&self) -> BoxFuture<'_, DbResult<DbConnection<'_>>> {
        Box::pin(async move { Ok(self.get().await?) })
    }
}

/// ## Summary
/// Creates a connection pool holding at most `size` connections.
///
/// Connections are opened lazily; use [`check_connection`] to verify the
/// database is reachable.
///
/// ## Errors
/// Returns an error if the pool cannot be built from the database URL.
#[tracing::instrument(skip(database_url), fields(pool_size = size))]
pub async fn create_pool(database_url: &str, size: u32) -> anyhow::Result<DbPool> {
    tracing::debug!("Creating database connection pool");

    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);

    let pool = Pool::builder()
        .max_size(size.max(1))
        .connection_timeout(CHECKOUT_TIMEOUT)
        .build(manager)
        .await?;

    tracing::info!(pool_size = size, "Database connection pool created");

    Ok(pool)
}

/// ## Summary
/// Runs a trivial query on a pooled connection.
///
/// ## Errors
/// Returns an error if no connection can be checked out or the query fails.
#[tracing::instrument(skip(provider))]
pub async fn check_connection(provider: &dyn DbProvider) -> DbResult<()> {
    let mut conn = provider.get_connection().await?;

    diesel::sql_query("SELECT 1").execute(&mut conn).await?;

    tracing::debug!("Database connection verified");

    Ok(())
}
