//! Core permission types
//!
//! This module defines the identifier, node, and display types shared by
//! the registry, hierarchy index, and checker.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, unique identifier for a permission.
///
/// Ids are opaque integers assigned once in the registry definition and
/// never reused. Ordering has no semantic meaning beyond determinism.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct PermissionId(pub u32);

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PermissionId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Position of a node in the permission forest.
///
/// Roots are modeled as an explicit variant rather than the "parent equals
/// self" sentinel some definition formats use; the config loader normalizes
/// that sentinel into [`Parent::Root`] at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    /// Top of its own tree; implied by no other permission.
    Root,
    /// Implied by the given parent permission.
    Child(PermissionId),
}

/// One row of the permission registry.
///
/// The display strings (`title`, `label`, `description`) are opaque to the
/// engine and carried through for UI collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionNode {
    /// Unique key.
    pub id: PermissionId,
    /// Long display name.
    pub title: String,
    /// Short display name.
    pub label: String,
    /// Human-readable description of the capability.
    pub description: String,
    /// Parent link; a parent's grant implies this node's grant.
    pub parent: Parent,
}

impl PermissionNode {
    /// Create a root node (top of its own tree).
    pub fn root(
        id: PermissionId,
        title: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            label: label.into(),
            description: description.into(),
            parent: Parent::Root,
        }
    }

    /// Create a child node implied by `parent`.
    pub fn child(
        id: PermissionId,
        parent: PermissionId,
        title: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            label: label.into(),
            description: description.into(),
            parent: Parent::Child(parent),
        }
    }

    /// Whether this node is the top of its own tree.
    pub fn is_root(&self) -> bool {
        matches!(self.parent, Parent::Root)
    }
}

/// Borrowed display metadata for rendering permission-aware UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMeta<'a> {
    pub title: &'a str,
    pub label: &'a str,
    pub description: &'a str,
}

impl PermissionNode {
    /// Borrow the display strings for this node.
    pub fn display(&self) -> DisplayMeta<'_> {
        DisplayMeta {
            title: &self.title,
            label: &self.label,
            description: &self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(PermissionId(42).to_string(), "42");
    }

    #[test]
    fn test_root_and_child_constructors() {
        let root = PermissionNode::root(PermissionId(0), "Root", "Root", "Root permissions");
        assert!(root.is_root());

        let child = PermissionNode::child(
            PermissionId(1),
            PermissionId(0),
            "Child",
            "Child",
            "A child",
        );
        assert!(!child.is_root());
        assert_eq!(child.parent, Parent::Child(PermissionId(0)));
    }

    #[test]
    fn test_display_metadata_borrows_strings() {
        let node = PermissionNode::root(PermissionId(0), "Title", "Label", "Desc");
        let meta = node.display();
        assert_eq!(meta.title, "Title");
        assert_eq!(meta.label, "Label");
        assert_eq!(meta.description, "Desc");
    }
}
