use std::sync::Arc;

use salvo::async_trait;

use crate::error::AppResult;
use cardport_core::config::{Settings, StorageBackend};
use cardport_core::error::CoreError;
use cardport_db::db::connection::{check_connection, create_pool};
use cardport_db::db::migrate::run_migrations;
use cardport_service::store::{ContactStore, MemoryContactStore, PgContactStore};

pub struct StoreHandler {
    pub store: Arc<dyn ContactStore>,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.store));
    }
}

/// ## Summary
/// Retrieves the contact store from the depot.
///
/// ## Errors
/// Returns an error if the contact store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn ContactStore>> {
    depot
        .obtain::<Arc<dyn ContactStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Contact store not found in depot").into())
}

/// ## Summary
/// Builds the contact store selected by `storage.backend`.
///
/// For Postgres this runs pending migrations and creates the connection pool.
///
/// ## Errors
/// Returns an error if the database settings are missing, migrations fail,
/// or the pool cannot be created.
pub async fn build_store(config: &Settings) -> anyhow::Result<Arc<dyn ContactStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory contact storage; imported contacts are not persisted");
            Ok(Arc::new(MemoryContactStore::new()))
        }
        StorageBackend::Postgres => {
            let database = config.database.as_ref().ok_or_else(|| {
                CoreError::InvalidConfiguration(
                    "database.url is required for postgres storage".to_string(),
                )
            })?;

            run_migrations(&database.url).await?;

            let pool = create_pool(&database.url, u32::from(database.max_connections)).await?;
            check_connection(&pool).await?;

            Ok(Arc::new(PgContactStore::new(pool)))
        }
    }
}
