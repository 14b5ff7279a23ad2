//! Caller authentication and organization resolution.

pub mod authenticate;
pub mod depot;

pub use authenticate::{AuthenticatedUser, authenticate, resolve_organization};
