//! Depot keys shared between middleware and handlers.

pub mod depot_keys {
    /// The [`AuthenticatedUser`](crate::auth::AuthenticatedUser) of the request, if any.
    pub const AUTHENTICATED_USER: &str = "authenticated_user";
}

/// ## Summary
/// Returns the authenticated user stored by the auth middleware.
///
/// ## Errors
/// Returns [`ServiceError::NotAuthenticated`](crate::error::ServiceError::NotAuthenticated)
/// if the request carries no authenticated user.
pub fn get_user_from_depot(
    depot: &salvo::Depot,
) -> crate::error::ServiceResult<&super::AuthenticatedUser> {
    depot
        .get::<super::AuthenticatedUser>(depot_keys::AUTHENTICATED_USER)
        .map_err(|_err| crate::error::ServiceError::NotAuthenticated)
}
