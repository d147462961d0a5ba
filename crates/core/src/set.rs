//! Permission set algebra
//!
//! A [`PermissionSet`] is the immutable value describing what a principal
//! was explicitly granted. Its closure against a [`HierarchyIndex`] is the
//! full set of permissions those grants imply.

use std::collections::BTreeSet;

use crate::hierarchy::HierarchyIndex;
use crate::types::PermissionId;

/// Explicit grants held by a principal.
///
/// Cheap to build per request or session from whatever grant list an
/// external identity store supplies. Membership only; insertion order is
/// irrelevant. Equality and hashing are over the grant set, which lets a
/// shared closure cache key on the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PermissionSet {
    granted: BTreeSet<PermissionId>,
}

impl PermissionSet {
    /// The set with no grants, used for unauthenticated principals.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from explicitly granted ids.
    pub fn from_grants(grants: impl IntoIterator<Item = PermissionId>) -> Self {
        Self {
            granted: grants.into_iter().collect(),
        }
    }

    /// The explicitly granted ids.
    pub fn granted(&self) -> &BTreeSet<PermissionId> {
        &self.granted
    }

    /// Whether the principal holds no grants at all.
    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    /// Compute the effective closure: every grant plus all of its
    /// descendants in the hierarchy.
    ///
    /// A granted id the index does not know contributes only itself, so
    /// the closure is always a superset of the grants.
    pub fn closure(&self, index: &HierarchyIndex) -> BTreeSet<PermissionId> {
        let mut closure = BTreeSet::new();
        for &grant in &self.granted {
            match index.descendants_of(grant) {
                Some(descendants) => closure.extend(descendants.iter().copied()),
                None => {
                    closure.insert(grant);
                }
            }
        }
        closure
    }

    /// Combine grants from two sources, e.g. direct grants plus a
    /// team-level grant.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            granted: self.granted.union(&other.granted).copied().collect(),
        }
    }
}

impl FromIterator<PermissionId> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = PermissionId>>(iter: I) -> Self {
        Self::from_grants(iter)
    }
}
