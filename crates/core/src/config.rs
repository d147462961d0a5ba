//! Registry definition files
//!
//! The permission table can be supplied as static TOML configuration
//! instead of the builtin catalog:
//!
//! ```toml
//! [[permission]]
//! id = 0
//! title = "Root"
//! label = "Root"
//! description = "Root permissions"
//! parent = 0          # self-reference marks a root, as does omitting it
//!
//! [[permission]]
//! id = 1
//! title = "TESTING"
//! label = "TESTING"
//! description = "TESTING"
//! parent = 0
//! ```
//!
//! The self-reference sentinel is normalized into [`Parent::Root`] here,
//! at the boundary; the rest of the engine never sees it.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::RegistryError;
use crate::registry::PermissionRegistry;
use crate::types::{Parent, PermissionId, PermissionNode};

/// Errors loading a registry definition file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the definition file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML content.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The definition parsed but failed registry validation.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// One `[[permission]]` entry in a definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionEntry {
    pub id: u32,
    pub title: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Absent or equal to `id` means this entry is a root.
    pub parent: Option<u32>,
}

impl PermissionEntry {
    fn into_node(self) -> PermissionNode {
        let parent = match self.parent {
            None => Parent::Root,
            Some(p) if p == self.id => Parent::Root,
            Some(p) => Parent::Child(PermissionId(p)),
        };
        PermissionNode {
            id: PermissionId(self.id),
            title: self.title,
            label: self.label,
            description: self.description,
            parent,
        }
    }
}

/// A parsed registry definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryConfig {
    #[serde(default, rename = "permission")]
    pub permissions: Vec<PermissionEntry>,
}

impl RegistryConfig {
    /// Parse a definition from TOML text.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a definition file from disk.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(
            permissions = config.permissions.len(),
            ?path,
            "loaded registry definition"
        );
        Ok(config)
    }

    /// Convert the parsed entries into a validated registry.
    pub fn into_registry(self) -> ConfigResult<PermissionRegistry> {
        let nodes: Vec<PermissionNode> = self
            .permissions
            .into_iter()
            .map(PermissionEntry::into_node)
            .collect();
        Ok(PermissionRegistry::register(nodes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[permission]]
        id = 0
        title = "Root"
        label = "Root"
        description = "Root permissions"
        parent = 0

        [[permission]]
        id = 10
        title = "Org Owner"
        label = "Organization Owner"
        description = "Permissions for organization owners"

        [[permission]]
        id = 25
        title = "Create Organization"
        label = "Create Org"
        description = "Ability to create an organization"
        parent = 10
    "#;

    #[test]
    fn test_parse_and_build_registry() {
        let registry = RegistryConfig::from_toml(SAMPLE)
            .unwrap()
            .into_registry()
            .unwrap();

        assert_eq!(registry.len(), 3);
        // Self-reference and omission both mean root.
        assert!(registry.is_root(PermissionId(0)));
        assert!(registry.is_root(PermissionId(10)));
        assert!(!registry.is_root(PermissionId(25)));
    }

    #[test]
    fn test_missing_description_defaults_empty() {
        let toml = r#"
            [[permission]]
            id = 1
            title = "T"
            label = "L"
        "#;

        let config = RegistryConfig::from_toml(toml).unwrap();
        assert_eq!(config.permissions[0].description, "");
    }

    #[test]
    fn test_invalid_definition_surfaces_registry_error() {
        let toml = r#"
            [[permission]]
            id = 1
            title = "Orphan"
            label = "Orphan"
            parent = 42
        "#;

        let err = RegistryConfig::from_toml(toml)
            .unwrap()
            .into_registry()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Registry(_)));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = RegistryConfig::from_toml("[[permission").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_definition_builds_empty_registry() {
        let registry = RegistryConfig::from_toml("")
            .unwrap()
            .into_registry()
            .unwrap();
        assert!(registry.is_empty());
    }
}
