use salvo::Router;

use super::{CONTACTS_ROUTE_COMPONENT, IMPORT_ROUTE_COMPONENT};

mod import;


#[must_use]
pub fn routes() -> Router {
    Router::with_path(CONTACTS_ROUTE_COMPONENT)
        .push(Router::with_path(IMPORT_ROUTE_COMPONENT).post(import::import))
}
