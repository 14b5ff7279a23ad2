use salvo::Depot;
use tracing::error;

use crate::config::get_config_from_depot;
use cardport_service::auth::{authenticate, depot::depot_keys};
use cardport_service::error::ServiceError;

/// ## Summary
/// Authentication middleware that authenticates the request and stores the user in the depot.
///
/// Unauthenticated requests pass through without a user; handlers that need
/// one answer 401 themselves.
///
/// ## Side Effects
/// Inserts the authenticated user into the depot under
/// [`depot_keys::AUTHENTICATED_USER`] for downstream handlers to access.
///
/// ## Errors
/// Returns an HTTP 500 response if the configuration is missing or invalid.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        match authenticate(req, &config) {
            Ok(user) => {
                tracing::debug!(
                    user_id = %user.user_id,
                    user_email = user.email.as_deref().unwrap_or("-"),
                    "User authenticated successfully"
                );
                depot.insert(depot_keys::AUTHENTICATED_USER, user);
            }
            Err(ServiceError::NotAuthenticated) => {
                tracing::debug!("Request not authenticated");
            }
            Err(service_err) => {
                error!(error = ?service_err, "Authentication failed with error");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                res.body("Internal Server Error");
                ctrl.skip_rest();
            }
        }
    }
}

/// ## Summary
/// Middleware handler for authentication.
pub struct AuthMiddleware;
