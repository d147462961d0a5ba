//! Hierarchy index - precomputed descendant sets
//!
//! Built once from a validated registry by inverting parent pointers into
//! child adjacency and walking each node's subtree. Precomputing makes
//! every later closure computation a handful of set lookups instead of a
//! per-check traversal.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::{error, info};

use crate::error::HierarchyError;
use crate::registry::PermissionRegistry;
use crate::types::PermissionId;

/// Read-only map from each permission to its full descendant set.
#[derive(Debug, Clone)]
pub struct HierarchyIndex {
    descendants: BTreeMap<PermissionId, BTreeSet<PermissionId>>,
}

impl HierarchyIndex {
    /// Build the index from a validated registry.
    ///
    /// The traversal carries a visited guard so that corrupt input fails
    /// with [`HierarchyError::CycleDetected`] instead of looping; with a
    /// registry that passed validation this is unreachable.
    pub fn build(registry: &PermissionRegistry) -> Result<Self, HierarchyError> {
        let mut descendants: BTreeMap<PermissionId, BTreeSet<PermissionId>> = BTreeMap::new();

        for start in registry.ids() {
            let mut reached: BTreeSet<PermissionId> = BTreeSet::new();
            reached.insert(start);

            let mut queue: VecDeque<PermissionId> = VecDeque::new();
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                for child in registry.children(current) {
                    // Each node has one parent, so a repeat visit from a
                    // single source means the child graph loops.
                    if !reached.insert(child) {
                        error!(
                            permission = %child,
                            "cycle detected while indexing permission hierarchy"
                        );
                        return Err(HierarchyError::CycleDetected(child));
                    }
                    queue.push_back(child);
                }
            }

            descendants.insert(start, reached);
        }

        info!(nodes = descendants.len(), "permission hierarchy indexed");

        Ok(Self { descendants })
    }

    /// Full descendant set of a node, including the node itself.
    ///
    /// The self-inclusion convention keeps closure computation a plain
    /// union over grants. Returns `None` for ids absent from the registry.
    pub fn descendants_of(&self, id: PermissionId) -> Option<&BTreeSet<PermissionId>> {
        self.descendants.get(&id)
    }
}
