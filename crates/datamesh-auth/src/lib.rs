//! Static authentication configuration for the Hills Datamesh web clients
//!
//! This crate declares the parameters handed to the OAuth2/OIDC
//! authentication runtime at startup:
//! - client registration and identity-provider settings
//! - token cache behavior and a logging callback
//! - a registry of protected web APIs with their read/write scopes
//! - the derived consent scope list for sign-in
//!
//! The crate performs no token acquisition itself; it only supplies static,
//! load-time-validated parameters to the runtime that does. All exposed
//! values are immutable after construction and safe to share across threads.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod login;
pub mod provider;
pub mod resources;

// Re-export commonly used types and functions
pub use config::{AuthClientConfig, AuthSettings, CacheLocation, CacheSettings};
pub use error::{ConfigResult, ConfigurationError};
pub use logging::{log_sink, LogLevel, LoggerCallback, LoggerOptions};
pub use login::LoginRequest;
pub use provider::{auth_config, login_request, protected_resources};
pub use resources::{ProtectedResource, ProtectedResourceRegistry, ResourceScopes};
