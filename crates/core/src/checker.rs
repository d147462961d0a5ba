//! Access checker - the authorization query surface
//!
//! Owns the validated registry, the precomputed hierarchy index, and a
//! shared closure cache. Checks are synchronous, non-blocking, and safe to
//! run concurrently from any number of threads.

use std::collections::BTreeSet;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::info;

use crate::catalog;
use crate::error::{CheckError, EngineError, HierarchyError};
use crate::hierarchy::HierarchyIndex;
use crate::registry::PermissionRegistry;
use crate::set::PermissionSet;
use crate::types::{DisplayMeta, PermissionId};

/// Outcome of an authorization check.
///
/// `Denied` is an ordinary result, not an error; configuration problems
/// surface as [`CheckError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Authorized,
    Denied,
}

impl Decision {
    pub fn is_authorized(self) -> bool {
        matches!(self, Decision::Authorized)
    }
}

/// Authorization query surface over one registry.
///
/// Closures are memoized per distinct grant set in a concurrent map, so
/// repeated checks for the same principal shape cost a lookup plus a set
/// membership test.
#[derive(Debug)]
pub struct AccessChecker {
    registry: PermissionRegistry,
    index: HierarchyIndex,
    closures: DashMap<PermissionSet, Arc<BTreeSet<PermissionId>>>,
}

impl AccessChecker {
    /// Build a checker over a validated registry.
    pub fn new(registry: PermissionRegistry) -> Result<Self, HierarchyError> {
        let index = HierarchyIndex::build(&registry)?;
        info!(permissions = registry.len(), "access checker ready");
        Ok(Self {
            registry,
            index,
            closures: DashMap::new(),
        })
    }

    /// Build a checker over the builtin permission catalog.
    pub fn builtin() -> Result<Self, EngineError> {
        let registry = PermissionRegistry::register(catalog::builtin_nodes())?;
        Ok(Self::new(registry)?)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &PermissionRegistry {
        &self.registry
    }

    /// The precomputed hierarchy index.
    pub fn index(&self) -> &HierarchyIndex {
        &self.index
    }

    fn closure_of(&self, set: &PermissionSet) -> Arc<BTreeSet<PermissionId>> {
        if let Some(cached) = self.closures.get(set) {
            return Arc::clone(&cached);
        }
        let closure = Arc::new(set.closure(&self.index));
        self.closures.insert(set.clone(), Arc::clone(&closure));
        closure
    }

    /// Decide whether a principal holding `set` is authorized for
    /// `required`.
    ///
    /// An id absent from the registry is a configuration error, never a
    /// denial.
    pub fn check(
        &self,
        set: &PermissionSet,
        required: PermissionId,
    ) -> Result<Decision, CheckError> {
        if !self.registry.contains(required) {
            return Err(CheckError::UnknownPermission(required));
        }

        if self.closure_of(set).contains(&required) {
            Ok(Decision::Authorized)
        } else {
            Ok(Decision::Denied)
        }
    }

    /// Whether the principal is authorized for at least one of `ids`.
    ///
    /// Short-circuits on the first authorized id; unknown ids still error.
    pub fn require_any(
        &self,
        set: &PermissionSet,
        ids: &[PermissionId],
    ) -> Result<bool, CheckError> {
        for &id in ids {
            if self.check(set, id)?.is_authorized() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether the principal is authorized for every id in `ids`.
    ///
    /// Short-circuits on the first denial; unknown ids still error.
    pub fn require_all(
        &self,
        set: &PermissionSet,
        ids: &[PermissionId],
    ) -> Result<bool, CheckError> {
        for &id in ids {
            if !self.check(set, id)?.is_authorized() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Enumerate the registry-defined permissions a principal effectively
    /// holds, for rendering permission-aware UI.
    ///
    /// Grants unknown to the registry are omitted; they name nothing an
    /// action here could require.
    pub fn effective_permissions(&self, set: &PermissionSet) -> BTreeSet<PermissionId> {
        self.closure_of(set)
            .iter()
            .copied()
            .filter(|&id| self.registry.contains(id))
            .collect()
    }

    /// Display strings for a permission, for UI collaborators.
    pub fn display_metadata(&self, id: PermissionId) -> Option<DisplayMeta<'_>> {
        self.registry.display_metadata(id)
    }
}
