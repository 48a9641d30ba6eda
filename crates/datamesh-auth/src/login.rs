//! Login request: the consent scope list derived from the resource registry

use serde::{Deserialize, Serialize};

use crate::error::{ConfigResult, ConfigurationError};
use crate::resources::ProtectedResourceRegistry;

/// Scopes prompted for user consent during sign-in.
///
/// Always derived from the registry, never hand-edited: for each resource
/// the read scopes are appended first, then the write scopes. Scopes shared
/// by several resources are kept as-is, so the same identifier may appear
/// more than once in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub scopes: Vec<String>,
}

impl LoginRequest {
    /// Build the consent scope list for the named resources, in order.
    ///
    /// Fails if a name is not registered; a consent order drifting out of
    /// sync with the registry is a configuration defect.
    pub fn for_resources(
        registry: &ProtectedResourceRegistry,
        names: &[&str],
    ) -> ConfigResult<Self> {
        let mut scopes = Vec::new();
        for &name in names {
            let resource =
                registry
                    .get(name)
                    .ok_or_else(|| ConfigurationError::UnknownResource {
                        name: name.to_string(),
                    })?;
            scopes.extend(resource.scopes.read.iter().cloned());
            scopes.extend(resource.scopes.write.iter().cloned());
        }
        Ok(Self { scopes })
    }

    /// Build the consent scope list over every registered resource, in
    /// registration order.
    pub fn from_registry(registry: &ProtectedResourceRegistry) -> Self {
        let mut scopes = Vec::new();
        for resource in registry.iter() {
            scopes.extend(resource.scopes.read.iter().cloned());
            scopes.extend(resource.scopes.write.iter().cloned());
        }
        Self { scopes }
    }
}
