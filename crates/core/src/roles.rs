//! Canonical roles
//!
//! Named, predefined permission sets assigned to classes of principals.
//! Roles are values: build them once at startup (or per test) and hand
//! them out by reference. Nothing here mutates after construction.

use crate::catalog::ids;
use crate::set::PermissionSet;
use crate::types::PermissionId;

/// A named, predefined [`PermissionSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    name: &'static str,
    set: PermissionSet,
}

impl Role {
    /// Define a role from a name and its explicit grants.
    pub fn new(name: &'static str, grants: impl IntoIterator<Item = PermissionId>) -> Self {
        Self {
            name,
            set: PermissionSet::from_grants(grants),
        }
    }

    /// Superuser: a single top-level grant.
    pub fn root() -> Self {
        Self::new("root", [ids::ROOT])
    }

    /// Unauthenticated visitor: no grants at all.
    pub fn not_logged_in() -> Self {
        Self::new("not_logged_in", [])
    }

    /// Diagnostic role used in test and verification contexts.
    pub fn testing() -> Self {
        Self::new("testing", [ids::TESTING])
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn set(&self) -> &PermissionSet {
        &self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_roles() {
        assert_eq!(Role::root().set().granted().len(), 1);
        assert!(Role::not_logged_in().set().is_empty());
        assert!(Role::testing().set().granted().contains(&ids::TESTING));
    }

    #[test]
    fn test_role_names() {
        assert_eq!(Role::root().name(), "root");
        assert_eq!(Role::not_logged_in().name(), "not_logged_in");
        assert_eq!(Role::testing().name(), "testing");
    }
}
