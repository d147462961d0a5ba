//! Permission registry - immutable catalog of permission nodes
//!
//! The registry is built once from a definition table, validated, and then
//! only ever read. No mutating API exists after construction, so it is safe
//! to share across threads without locking.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use crate::error::RegistryError;
use crate::types::{DisplayMeta, Parent, PermissionId, PermissionNode};

/// Validated, read-only catalog of permission nodes.
#[derive(Debug, Clone)]
pub struct PermissionRegistry {
    nodes: BTreeMap<PermissionId, PermissionNode>,
    /// Direct children per node, derived by inverting parent pointers.
    children: BTreeMap<PermissionId, BTreeSet<PermissionId>>,
}

impl PermissionRegistry {
    /// Build a registry from a node table, validating it.
    ///
    /// Rejects duplicate ids, parent references to nonexistent ids, and
    /// parent cycles. A `Parent::Child` pointing at the node's own id is
    /// treated as a cycle; roots are expressed as [`Parent::Root`].
    pub fn register(
        nodes: impl IntoIterator<Item = PermissionNode>,
    ) -> Result<Self, RegistryError> {
        let mut map: BTreeMap<PermissionId, PermissionNode> = BTreeMap::new();
        for node in nodes {
            let id = node.id;
            if map.insert(id, node).is_some() {
                return Err(RegistryError::DuplicateId(id));
            }
        }

        for node in map.values() {
            if let Parent::Child(parent) = node.parent {
                if !map.contains_key(&parent) {
                    return Err(RegistryError::DanglingParent {
                        id: node.id,
                        parent,
                    });
                }
            }
        }

        Self::reject_cycles(&map)?;

        let mut children: BTreeMap<PermissionId, BTreeSet<PermissionId>> = BTreeMap::new();
        for node in map.values() {
            if let Parent::Child(parent) = node.parent {
                children.entry(parent).or_default().insert(node.id);
            }
        }

        let roots = map.values().filter(|n| n.is_root()).count();
        info!(nodes = map.len(), roots, "permission registry built");

        Ok(Self {
            nodes: map,
            children,
        })
    }

    /// Walk each node's parent chain and reject any cycle.
    ///
    /// Nodes whose chain already reached a known-good node are skipped, so
    /// the whole pass is linear in the table size.
    fn reject_cycles(
        nodes: &BTreeMap<PermissionId, PermissionNode>,
    ) -> Result<(), RegistryError> {
        let mut verified: BTreeSet<PermissionId> = BTreeSet::new();

        for start in nodes.keys().copied() {
            if verified.contains(&start) {
                continue;
            }

            let mut path: Vec<PermissionId> = Vec::new();
            let mut on_path: BTreeSet<PermissionId> = BTreeSet::new();
            let mut current = start;

            loop {
                if !on_path.insert(current) {
                    return Err(RegistryError::Cycle(current));
                }
                path.push(current);

                if verified.contains(&current) {
                    break;
                }

                match nodes[&current].parent {
                    Parent::Root => break,
                    Parent::Child(parent) => current = parent,
                }
            }

            verified.extend(path);
        }

        Ok(())
    }

    /// Look up a node by id.
    pub fn get(&self, id: PermissionId) -> Option<&PermissionNode> {
        self.nodes.get(&id)
    }

    /// Whether the registry defines the given id.
    pub fn contains(&self, id: PermissionId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Direct children of a node (empty for leaves and unknown ids).
    pub fn children(&self, id: PermissionId) -> BTreeSet<PermissionId> {
        self.children.get(&id).cloned().unwrap_or_default()
    }

    /// Whether the given id is the top of its own tree.
    ///
    /// Unknown ids are not roots.
    pub fn is_root(&self, id: PermissionId) -> bool {
        self.nodes.get(&id).is_some_and(PermissionNode::is_root)
    }

    /// Display strings for a node, for UI collaborators.
    pub fn display_metadata(&self, id: PermissionId) -> Option<DisplayMeta<'_>> {
        self.nodes.get(&id).map(PermissionNode::display)
    }

    /// Number of registered permissions.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &PermissionNode> {
        self.nodes.values()
    }

    /// All registered ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PermissionId> + '_ {
        self.nodes.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> PermissionId {
        PermissionId(raw)
    }

    fn three_level() -> Vec<PermissionNode> {
        vec![
            PermissionNode::root(id(0), "Root", "Root", "Root permissions"),
            PermissionNode::child(id(1), id(0), "Owner", "Owner", "Owner permissions"),
            PermissionNode::child(id(2), id(1), "Create", "Create", "Create things"),
        ]
    }

    #[test]
    fn test_register_valid_table() {
        let registry = PermissionRegistry::register(three_level()).unwrap();

        assert_eq!(registry.len(), 3);
        assert!(registry.is_root(id(0)));
        assert!(!registry.is_root(id(1)));
        assert!(!registry.is_root(id(99)));
        assert_eq!(registry.children(id(0)), BTreeSet::from([id(1)]));
        assert_eq!(registry.children(id(1)), BTreeSet::from([id(2)]));
        assert!(registry.children(id(2)).is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut nodes = three_level();
        nodes.push(PermissionNode::root(id(1), "Dup", "Dup", "Duplicate"));

        let err = PermissionRegistry::register(nodes).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId(id(1)));
    }

    #[test]
    fn test_duplicate_id_five_rejected() {
        // Two distinct rows sharing id 5 must fail before any check can run.
        let nodes = vec![
            PermissionNode::root(id(5), "First", "First", "First"),
            PermissionNode::root(id(5), "Second", "Second", "Second"),
        ];

        let err = PermissionRegistry::register(nodes).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId(id(5)));
    }

    #[test]
    fn test_dangling_parent_rejected() {
        let nodes = vec![PermissionNode::child(id(1), id(42), "Orphan", "Orphan", "Orphan")];

        let err = PermissionRegistry::register(nodes).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DanglingParent {
                id: id(1),
                parent: id(42),
            }
        );
    }

    #[test]
    fn test_two_node_cycle_rejected() {
        let nodes = vec![
            PermissionNode::child(id(1), id(2), "A", "A", "A"),
            PermissionNode::child(id(2), id(1), "B", "B", "B"),
        ];

        let err = PermissionRegistry::register(nodes).unwrap_err();
        assert!(matches!(err, RegistryError::Cycle(_)));
    }

    #[test]
    fn test_self_parent_child_rejected() {
        // Roots are Parent::Root; a literal self-edge is a cycle.
        let nodes = vec![PermissionNode::child(id(1), id(1), "Selfie", "Selfie", "Selfie")];

        let err = PermissionRegistry::register(nodes).unwrap_err();
        assert_eq!(err, RegistryError::Cycle(id(1)));
    }

    #[test]
    fn test_multiple_roots_allowed() {
        let nodes = vec![
            PermissionNode::root(id(0), "A", "A", "Tree A"),
            PermissionNode::root(id(10), "B", "B", "Tree B"),
            PermissionNode::child(id(11), id(10), "B1", "B1", "Under B"),
        ];

        let registry = PermissionRegistry::register(nodes).unwrap();
        assert!(registry.is_root(id(0)));
        assert!(registry.is_root(id(10)));
        assert_eq!(registry.children(id(10)), BTreeSet::from([id(11)]));
    }

    #[test]
    fn test_display_metadata() {
        let registry = PermissionRegistry::register(three_level()).unwrap();

        let meta = registry.display_metadata(id(1)).unwrap();
        assert_eq!(meta.title, "Owner");
        assert_eq!(meta.description, "Owner permissions");
        assert!(registry.display_metadata(id(99)).is_none());
    }
}
