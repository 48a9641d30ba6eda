//! Process-wide configuration provider
//!
//! Builds each static structure once, on first access, and hands out shared
//! references. Everything here is immutable after construction, so the
//! references are safe to pass across threads.

use once_cell::sync::Lazy;

use crate::config::AuthClientConfig;
use crate::constants::{SCOPE_READ, SCOPE_WRITE, SERVICE_BASE_URL};
use crate::error::ConfigResult;
use crate::login::LoginRequest;
use crate::resources::{ProtectedResource, ProtectedResourceRegistry, ResourceScopes};

/// Order in which resources contribute scopes to the login request. The
/// clients-sync scopes are requested first; the rest follow registration
/// order.
const CONSENT_ORDER: [&str; 5] = [
    "apiClientsSync",
    "apiExplorersSync",
    "apiOpportunitiesSync",
    "explorersAll",
    "clientsActive",
];

static AUTH_CONFIG: Lazy<AuthClientConfig> = Lazy::new(AuthClientConfig::default);

static PROTECTED_RESOURCES: Lazy<ProtectedResourceRegistry> = Lazy::new(default_registry);

static LOGIN_REQUEST: Lazy<LoginRequest> = Lazy::new(|| {
    LoginRequest::for_resources(&PROTECTED_RESOURCES, &CONSENT_ORDER)
        .expect("consent order references registered resources")
});

/// Configuration object to pass to the authentication client on creation.
pub fn auth_config() -> &'static AuthClientConfig {
    &AUTH_CONFIG
}

/// Registry of protected web APIs and the scopes they require.
pub fn protected_resources() -> &'static ProtectedResourceRegistry {
    &PROTECTED_RESOURCES
}

/// Scopes to prompt for user consent during sign-in. Computed once; every
/// call returns the same value.
pub fn login_request() -> &'static LoginRequest {
    &LOGIN_REQUEST
}

/// Fail-fast startup check over the whole static configuration.
///
/// Hosts call this once at boot; any error is fatal and never retried.
pub fn validate() -> ConfigResult<()> {
    auth_config().validate()?;
    protected_resources().validate()?;
    LoginRequest::for_resources(protected_resources(), &CONSENT_ORDER)?;
    Ok(())
}

fn datamesh_scopes() -> ResourceScopes {
    ResourceScopes {
        read: vec![SCOPE_READ.to_string()],
        write: vec![SCOPE_WRITE.to_string()],
    }
}

fn default_registry() -> ProtectedResourceRegistry {
    let mut registry = ProtectedResourceRegistry::new();
    let entries = [
        (
            "apiExplorersSync",
            format!("{}/explorers/sync", SERVICE_BASE_URL),
        ),
        (
            "apiClientsSync",
            format!("{}/clients/sync", SERVICE_BASE_URL),
        ),
        (
            // Not yet deployed; points at the local development host.
            "apiOpportunitiesSync",
            "http://localhost/opportunities/sync".to_string(),
        ),
        (
            "explorersAll",
            format!("{}/explorers/all?format=json", SERVICE_BASE_URL),
        ),
        (
            "clientsActive",
            format!("{}/clients/active?format=json", SERVICE_BASE_URL),
        ),
    ];
    for (name, endpoint) in entries {
        registry
            .insert(ProtectedResource {
                name: name.to_string(),
                endpoint,
                scopes: datamesh_scopes(),
            })
            .expect("default resource names are unique");
    }
    registry
}
