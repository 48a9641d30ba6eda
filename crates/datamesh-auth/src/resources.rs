//! Protected resource registry: API endpoints and the scopes they require

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigResult, ConfigurationError};

/// Read and write scope identifiers for one protected resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceScopes {
    /// Scopes required to read from the resource
    pub read: Vec<String>,

    /// Scopes required to write to the resource
    pub write: Vec<String>,
}

/// A protected web API: a network endpoint plus the scopes an access token
/// must carry to call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedResource {
    /// Unique key within the registry
    pub name: String,

    /// Absolute HTTPS URL, or a localhost placeholder during development
    pub endpoint: String,

    pub scopes: ResourceScopes,
}

/// Insertion-ordered, name-unique collection of protected resources.
///
/// The host application looks up an entry when it needs an access token for
/// that resource's endpoint; iteration order is registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedResourceRegistry {
    entries: Vec<ProtectedResource>,
}

impl ProtectedResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource, rejecting duplicate names.
    pub fn insert(&mut self, resource: ProtectedResource) -> ConfigResult<()> {
        if self.get(&resource.name).is_some() {
            return Err(ConfigurationError::DuplicateResource {
                name: resource.name,
            });
        }
        self.entries.push(resource);
        Ok(())
    }

    /// Look up a resource by name.
    pub fn get(&self, name: &str) -> Option<&ProtectedResource> {
        self.entries.iter().find(|r| r.name == name)
    }

    /// Resources in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProtectedResource> {
        self.entries.iter()
    }

    /// Resource names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every entry: endpoints must be HTTPS (or localhost during
    /// development) and both scope lists must be non-empty well-formed URIs.
    pub fn validate(&self) -> ConfigResult<()> {
        for resource in &self.entries {
            validate_endpoint(&resource.name, &resource.endpoint)?;
            validate_scopes(&resource.name, &resource.scopes)?;
        }
        Ok(())
    }
}

fn validate_endpoint(name: &str, endpoint: &str) -> ConfigResult<()> {
    let url = Url::parse(endpoint).map_err(|e| ConfigurationError::InvalidUrl {
        field: format!("{}.endpoint", name),
        details: e.to_string(),
    })?;
    let is_localhost = url.host_str() == Some("localhost");
    if url.scheme() != "https" && !is_localhost {
        return Err(ConfigurationError::InvalidUrl {
            field: format!("{}.endpoint", name),
            details: "endpoint must use HTTPS or point at localhost".to_string(),
        });
    }
    Ok(())
}

fn validate_scopes(name: &str, scopes: &ResourceScopes) -> ConfigResult<()> {
    if scopes.read.is_empty() || scopes.write.is_empty() {
        return Err(ConfigurationError::EmptyScope {
            resource: name.to_string(),
        });
    }
    for scope in scopes.read.iter().chain(scopes.write.iter()) {
        if !is_well_formed_scope(scope) {
            return Err(ConfigurationError::EmptyScope {
                resource: name.to_string(),
            });
        }
    }
    Ok(())
}

/// A scope identifier is an `api://<app-id>/<ScopeName>` URI.
pub fn is_well_formed_scope(scope: &str) -> bool {
    match Url::parse(scope) {
        Ok(url) => url.scheme() == "api" && !url.path().trim_matches('/').is_empty(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SCOPE_READ, SCOPE_WRITE};

    fn resource(name: &str, endpoint: &str) -> ProtectedResource {
        ProtectedResource {
            name: name.to_string(),
            endpoint: endpoint.to_string(),
            scopes: ResourceScopes {
                read: vec![SCOPE_READ.to_string()],
                write: vec![SCOPE_WRITE.to_string()],
            },
        }
    }

    #[test]
    fn test_insert_rejects_duplicate_names() {
        let mut registry = ProtectedResourceRegistry::new();
        registry
            .insert(resource("api", "https://example.com/api"))
            .unwrap();

        let err = registry
            .insert(resource("api", "https://example.com/other"))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::DuplicateResource { name } if name == "api"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let mut registry = ProtectedResourceRegistry::new();
        registry
            .insert(resource("first", "https://example.com/a"))
            .unwrap();
        registry
            .insert(resource("second", "https://example.com/b"))
            .unwrap();

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_validate_accepts_https_and_localhost() {
        let mut registry = ProtectedResourceRegistry::new();
        registry
            .insert(resource("remote", "https://example.com/api"))
            .unwrap();
        registry
            .insert(resource("local", "http://localhost/api"))
            .unwrap();

        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_plain_http_endpoint() {
        let mut registry = ProtectedResourceRegistry::new();
        registry
            .insert(resource("insecure", "http://example.com/api"))
            .unwrap();

        assert!(matches!(
            registry.validate(),
            Err(ConfigurationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_scope_list() {
        let mut registry = ProtectedResourceRegistry::new();
        let mut entry = resource("api", "https://example.com/api");
        entry.scopes.write.clear();
        registry.insert(entry).unwrap();

        assert!(matches!(
            registry.validate(),
            Err(ConfigurationError::EmptyScope { resource }) if resource == "api"
        ));
    }

    #[test]
    fn test_scope_well_formedness() {
        assert!(is_well_formed_scope(SCOPE_READ));
        assert!(is_well_formed_scope(SCOPE_WRITE));

        assert!(!is_well_formed_scope(""));
        assert!(!is_well_formed_scope("HillsDatamesh.Read"));
        assert!(!is_well_formed_scope("https://example.com/scope"));
        assert!(!is_well_formed_scope("api://app-id"));
    }
}
