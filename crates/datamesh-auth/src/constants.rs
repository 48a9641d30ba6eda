//! Datamesh authentication constants
//!
//! These constants are pre-compiled into the binary to avoid the need for
//! external configuration files.

/// Application (client) ID registered for the Datamesh web client
pub const CLIENT_ID: &str = "d066c855-48e7-4ba1-858a-80669a1e28d8";

/// Identity-provider tenant authority used for authentication requests
pub const AUTHORITY: &str =
    "https://login.microsoftonline.com/44112a0a-9f7b-43a6-9caa-f450441f29a5";

/// Redirect URI registered with the identity provider
pub const REDIRECT_URI: &str = "/";

/// Page to navigate to after logout
pub const POST_LOGOUT_REDIRECT_URI: &str = "/";

/// Capability tag advertising that the client can handle claims challenges
pub const CLAIMS_CHALLENGE_CAPABILITY: &str = "CP1";

/// Base URL of the Datamesh service hosting the protected APIs
pub const SERVICE_BASE_URL: &str = "https://hillsspikedatameshservice.azurewebsites.net";

/// Delegated read scope for the Datamesh API
pub const SCOPE_READ: &str = "api://5130d7ef-8880-416a-8613-bb6fb08be26d/HillsDatamesh.Read";

/// Delegated write scope for the Datamesh API
pub const SCOPE_WRITE: &str = "api://5130d7ef-8880-416a-8613-bb6fb08be26d/HillsDatamesh.Write";
