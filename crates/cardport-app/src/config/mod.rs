use std::sync::Arc;

use salvo::async_trait;
pub use cardport_core::config::*;

use crate::error::{AppError, AppResult};

/// Injects the loaded [`Settings`] into every request's depot.
pub struct ConfigHandler {
    settings: Arc<Settings>,
}

impl ConfigHandler {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
    }
}

/// ## Summary
/// Retrieves the application configuration from the depot.
///
/// ## Errors
/// Returns an error if the configuration is not found in the depot.
pub fn get_config_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot.obtain::<Arc<Settings>>().cloned().map_err(|_err| {
        AppError::CoreError(cardport_core::error::CoreError::InvariantViolation(
            "Configuration not found in depot",
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_an_internal_error() {
        let depot = salvo::Depot::new();
        let err = get_config_from_depot(&depot).unwrap_err();
        assert_eq!(
            err.status_code(),
            salvo::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn injected_config_is_shared() {
        let settings = Settings::from_toml(
            r#"
[storage]
backend = "memory"
"#,
        )
        .unwrap();
        let handler = ConfigHandler::new(settings);

        let mut depot = salvo::Depot::new();
        depot.inject(Arc::clone(&handler.settings));

        let config = get_config_from_depot(&depot).unwrap();
        assert!(Arc::ptr_eq(&config, &handler.settings));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }
}
