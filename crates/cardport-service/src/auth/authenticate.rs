use cardport_core::config::{AuthMethod, ProxyAuthConfig, Settings};

use crate::error::{ServiceError, ServiceResult};
use crate::store::ContactStore;

/// The caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: uuid::Uuid,
    pub email: Option<String>,
    /// Organization fixed by configuration, bypassing the membership lookup.
    pub organization_id: Option<uuid::Uuid>,
}

/// ## Summary
/// Authenticate a user based on the configured authentication method.
///
/// - `single_user`: the configured user is always authenticated.
/// - `proxy`: the user id is taken from a trusted header set by a reverse proxy.
///
/// ## Errors
/// Returns [`ServiceError::NotAuthenticated`] if the request carries no usable
/// identity, or [`ServiceError::InvalidConfiguration`] if the selected method
/// is missing its settings.
#[tracing::instrument(skip(req, config), fields(method = ?config.auth.method))]
pub fn authenticate(req: &salvo::Request, config: &Settings) -> ServiceResult<AuthenticatedUser> {
    match config.auth.method {
        AuthMethod::SingleUser => authenticate_single_user(config),
        AuthMethod::Proxy => authenticate_proxy(req, config),
    }
}

fn authenticate_single_user(config: &Settings) -> ServiceResult<AuthenticatedUser> {
    let single_user = config
        .auth
        .single_user
        .as_ref()
        .ok_or(ServiceError::InvalidConfiguration(
            "Single user config is missing".to_string(),
        ))?;

    Ok(AuthenticatedUser {
        user_id: single_user.user_id,
        email: Some(single_user.email.clone()),
        organization_id: single_user.organization_id,
    })
}

fn authenticate_proxy(req: &salvo::Request, config: &Settings) -> ServiceResult<AuthenticatedUser> {
    let default_proxy = ProxyAuthConfig::default();
    let proxy = config.auth.proxy.as_ref().unwrap_or(&default_proxy);

    let Some(raw) = req.headers().get(proxy.user_header.as_str()) else {
        tracing::debug!(header = %proxy.user_header, "Proxy user header missing");
        return Err(ServiceError::NotAuthenticated);
    };

    let user_id = raw
        .to_str()
        .ok()
        .and_then(|value| uuid::Uuid::parse_str(value.trim()).ok())
        .ok_or_else(|| {
            tracing::debug!(header = %proxy.user_header, "Proxy user header is not a user id");
            ServiceError::NotAuthenticated
        })?;

    Ok(AuthenticatedUser {
        user_id,
        email: None,
        organization_id: None,
    })
}

/// ## Summary
/// Resolves the organization contacts are imported into.
///
/// ## Errors
/// Returns [`ServiceError::NoOrganization`] if the user belongs to no
/// organization, or the store's error if the lookup fails.
pub async fn resolve_organization(
    store: &dyn ContactStore,
    user: &AuthenticatedUser,
) -> ServiceResult<uuid::Uuid> {
    if let Some(organization_id) = user.organization_id {
        return Ok(organization_id);
    }

    store
        .organization_for_user(user.user_id)
        .await?
        .ok_or(ServiceError::NoOrganization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryContactStore;

    fn settings(toml: &str) -> Settings {
        Settings::from_toml(toml).unwrap()
    }

    fn proxy_settings() -> Settings {
        settings(
            r#"
[storage]
backend = "memory"

[auth]
method = "proxy"
"#,
        )
    }

    #[test]
    fn single_user_is_always_authenticated() {
        let config = settings(
            r#"
[storage]
backend = "memory"

[auth]
method = "single_user"

[auth.single_user]
user_id = "0190f3c4-7d1e-7a30-9b1e-3c1f0e2a9d41"
email = "owner@example.com"
"#,
        );

        let user = authenticate(&salvo::Request::new(), &config).unwrap();
        assert_eq!(user.email.as_deref(), Some("owner@example.com"));
        assert_eq!(user.organization_id, None);
    }

    #[test]
    fn single_user_without_settings_is_a_config_error() {
        let config = settings(
            r#"
[storage]
backend = "memory"

[auth]
method = "single_user"
"#,
        );

        let result = authenticate(&salvo::Request::new(), &config);
        assert!(matches!(result, Err(ServiceError::InvalidConfiguration(_))));
    }

    #[test]
    fn proxy_reads_user_header() {
        let user_id = uuid::Uuid::now_v7();
        let mut req = salvo::Request::new();
        req.headers_mut().insert(
            "X-Remote-User",
            user_id.to_string().parse().unwrap(),
        );

        let user = authenticate(&req, &proxy_settings()).unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[test]
    fn proxy_without_header_is_not_authenticated() {
        let result = authenticate(&salvo::Request::new(), &proxy_settings());
        assert!(matches!(result, Err(ServiceError::NotAuthenticated)));
    }

    #[test]
    fn proxy_with_malformed_header_is_not_authenticated() {
        let mut req = salvo::Request::new();
        req.headers_mut()
            .insert("X-Remote-User", "not-a-uuid".parse().unwrap());

        let result = authenticate(&req, &proxy_settings());
        assert!(matches!(result, Err(ServiceError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn organization_from_membership() {
        let store = MemoryContactStore::new();
        let organization_id = uuid::Uuid::now_v7();
        let user = AuthenticatedUser {
            user_id: uuid::Uuid::now_v7(),
            email: None,
            organization_id: None,
        };

        let missing = resolve_organization(&store, &user).await;
        assert!(matches!(missing, Err(ServiceError::NoOrganization)));

        store.add_member(organization_id, user.user_id).await;
        assert_eq!(
            resolve_organization(&store, &user).await.unwrap(),
            organization_id
        );
    }

    #[tokio::test]
    async fn pinned_organization_skips_lookup() {
        let store = MemoryContactStore::new();
        let organization_id = uuid::Uuid::now_v7();
        let user = AuthenticatedUser {
            user_id: uuid::Uuid::now_v7(),
            email: None,
            organization_id: Some(organization_id),
        };

        assert_eq!(
            resolve_organization(&store, &user).await.unwrap(),
            organization_id
        );
    }
}
