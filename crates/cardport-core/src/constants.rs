/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const CONTACTS_ROUTE_COMPONENT: &str = "contacts";
pub const CONTACTS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", CONTACTS_ROUTE_COMPONENT);

pub const IMPORT_ROUTE_COMPONENT: &str = "import";
pub const CONTACTS_IMPORT_ROUTE: &str =
    const_str::concat!(CONTACTS_ROUTE_PREFIX, "/", IMPORT_ROUTE_COMPONENT);

/// Header carrying the user id when `auth.method = "proxy"` and none is configured.
pub const DEFAULT_PROXY_USER_HEADER: &str = "X-Remote-User";

/// Default upper bound on an import payload (5 MiB).
pub const DEFAULT_IMPORT_MAX_BYTES: usize = 5 * 1024 * 1024;
