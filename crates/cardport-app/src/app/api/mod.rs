mod app_specific;
mod contacts;

use salvo::Router;

use crate::middleware::auth::AuthMiddleware;

// Re-export route constants from core
pub use cardport_core::constants::{
    API_ROUTE_COMPONENT, CONTACTS_IMPORT_ROUTE, CONTACTS_ROUTE_COMPONENT, IMPORT_ROUTE_COMPONENT,
};

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .push(app_specific::routes())
        .push(contacts::routes())
}
