//! permtree - hierarchical permission engine
//!
//! A registry of uniquely identified permissions arranged in a forest of
//! grants, plus the algebra for deciding whether a principal holding some
//! set of grants is authorized for a specific action. A parent's grant
//! implies every descendant's grant; trees never imply each other.
//!
//! # Architecture
//!
//! ```text
//! PermissionRegistry ──► HierarchyIndex ──► AccessChecker
//!   (validated once)    (descendant sets)    (check / require_any / require_all)
//!                                                ▲
//!                               PermissionSet ───┘
//!                            (per-principal grants)
//! ```
//!
//! The registry and index are built once at startup and never mutated, so
//! any number of threads can run checks concurrently without locking. The
//! only shared mutable state is the checker's closure cache.
//!
//! # Usage
//!
//! ```
//! use permtree_core::{catalog::ids, AccessChecker, Decision, PermissionSet};
//!
//! let checker = AccessChecker::builtin()?;
//!
//! // An org owner may create a team without that id being listed.
//! let owner = PermissionSet::from_grants([ids::ORG_OWNER]);
//! assert_eq!(checker.check(&owner, ids::CREATE_TEAM)?, Decision::Authorized);
//!
//! // An unauthenticated visitor holds nothing.
//! let visitor = PermissionSet::empty();
//! assert_eq!(checker.check(&visitor, ids::CREATE_TEAM)?, Decision::Denied);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Errors
//!
//! Registry construction rejects duplicate ids, dangling parents, and
//! cycles; a process should refuse to start on any of them. At query time,
//! asking about an id the registry does not define is a [`CheckError`],
//! never a silent denial.

pub mod catalog;
pub mod checker;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod registry;
pub mod roles;
pub mod set;
pub mod types;

pub use checker::{AccessChecker, Decision};
pub use config::{ConfigError, ConfigResult, PermissionEntry, RegistryConfig};
pub use error::{CheckError, EngineError, HierarchyError, RegistryError};
pub use hierarchy::HierarchyIndex;
pub use registry::PermissionRegistry;
pub use roles::Role;
pub use set::PermissionSet;
pub use types::{DisplayMeta, Parent, PermissionId, PermissionNode};
