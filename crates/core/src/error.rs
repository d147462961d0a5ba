//! Error types for the permission engine
//!
//! Construction errors ([`RegistryError`], [`HierarchyError`]) are fatal:
//! a process should refuse to serve authorization checks if the registry
//! definition is invalid. [`CheckError`] is a query-time configuration
//! error, distinct from an ordinary denial.

use crate::types::PermissionId;

/// Error raised while validating a permission registry definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The same id appears more than once in the definition.
    #[error("duplicate permission id: {0}")]
    DuplicateId(PermissionId),

    /// A node references a parent id that does not exist.
    #[error("permission {id} references unknown parent {parent}")]
    DanglingParent {
        id: PermissionId,
        parent: PermissionId,
    },

    /// The parent relation contains a cycle through the given id.
    #[error("parent cycle through permission id: {0}")]
    Cycle(PermissionId),
}

/// Defensive error raised by the hierarchy traversal.
///
/// Unreachable when the registry validated correctly; kept so that the
/// traversal fails closed instead of looping on corrupt input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// A node was reached twice while walking one tree downward.
    #[error("cycle detected during hierarchy traversal at permission id: {0}")]
    CycleDetected(PermissionId),
}

/// Error raised by an authorization query.
///
/// Callers must handle this distinctly from [`Decision::Denied`]; treating
/// an unknown id as a silent denial would mask deployment mistakes such as
/// a typo'd id that can never be satisfied.
///
/// [`Decision::Denied`]: crate::checker::Decision::Denied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// The required id is not present in the registry.
    #[error("unknown permission id: {0}")]
    UnknownPermission(PermissionId),
}

/// Umbrella error for building a checker from a definition in one step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}
