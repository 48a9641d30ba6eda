//! Client configuration passed to the authentication runtime on creation

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants;
use crate::error::{ConfigResult, ConfigurationError};
use crate::logging::LoggerOptions;

/// Identity-provider and client registration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Application (client) ID registered with the identity provider
    pub client_id: String,

    /// Identity-provider tenant endpoint used for authentication requests
    pub authority: String,

    /// Redirect URI registered with the identity provider
    pub redirect_uri: String,

    /// Page to navigate to after logout
    pub post_logout_redirect_uri: String,

    /// Advertised client capabilities ("CP1" signals claims-challenge support)
    pub client_capabilities: Vec<String>,
}

/// Where the runtime persists its token cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheLocation {
    /// Persistent storage shared across sessions (SSO between tabs)
    #[serde(rename = "persistent-storage")]
    Persistent,

    /// Per-session storage, cleared when the session ends
    #[serde(rename = "session-storage")]
    Session,
}

/// Token cache behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    pub cache_location: CacheLocation,
    pub store_auth_state_in_cookie: bool,
}

/// Full configuration object passed to the authentication client on creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClientConfig {
    /// Client registration and identity-provider settings
    pub auth: AuthSettings,

    /// Token cache behavior
    pub cache: CacheSettings,

    /// Logging callback for runtime diagnostics
    #[serde(skip, default)]
    pub logger: LoggerOptions,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            client_id: constants::CLIENT_ID.to_string(),
            authority: constants::AUTHORITY.to_string(),
            redirect_uri: constants::REDIRECT_URI.to_string(),
            post_logout_redirect_uri: constants::POST_LOGOUT_REDIRECT_URI.to_string(),
            client_capabilities: vec![constants::CLAIMS_CHALLENGE_CAPABILITY.to_string()],
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            cache_location: CacheLocation::Persistent,
            store_auth_state_in_cookie: false,
        }
    }
}

impl Default for AuthClientConfig {
    fn default() -> Self {
        Self {
            auth: AuthSettings::default(),
            cache: CacheSettings::default(),
            logger: LoggerOptions::default(),
        }
    }
}

impl AuthClientConfig {
    /// Load-time validation of the client settings.
    ///
    /// The defaults are literal constants and always pass; this exists so a
    /// host editing the configuration fails at startup rather than on the
    /// first authentication request.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.auth.client_id.is_empty() {
            return Err(ConfigurationError::MissingField {
                field: "auth.client_id".to_string(),
            });
        }
        Url::parse(&self.auth.authority).map_err(|e| ConfigurationError::InvalidUrl {
            field: "auth.authority".to_string(),
            details: e.to_string(),
        })?;
        if self.auth.redirect_uri.is_empty() {
            return Err(ConfigurationError::MissingField {
                field: "auth.redirect_uri".to_string(),
            });
        }
        if self.auth.post_logout_redirect_uri.is_empty() {
            return Err(ConfigurationError::MissingField {
                field: "auth.post_logout_redirect_uri".to_string(),
            });
        }
        Ok(())
    }
}
