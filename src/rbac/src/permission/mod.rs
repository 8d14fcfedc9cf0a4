//! Permissions and their matching strategies
//!
//! A permission is a capability token with an identity and a variant-specific
//! match predicate. Three variants are provided:
//!
//! - [`StdPermission`]: identity equality only
//! - [`LayerPermission`]: hierarchical identities where a coarser permission
//!   grants everything nested beneath it (`admin` grants `admin:users:edit`)
//! - [`RestPermission`]: verb + path pattern with `/*` wildcard collapsing
//!
//! Callers add their own variants by implementing [`Permission`]. Comparing
//! against a variant a permission does not recognize never succeeds unless
//! the identities are equal.
//!
//! # Example
//!
//! ```rust
//! use cretoai_rbac::permission::{LayerPermission, Permission, StdPermission};
//!
//! let granted = LayerPermission::new("admin");
//!
//! assert!(granted.matches(&LayerPermission::new("admin:users:edit")));
//! assert!(!LayerPermission::new("admin:users").matches(&LayerPermission::new("admin")));
//! assert!(!granted.matches(&StdPermission::new("admin:users")));
//! ```

pub mod layered;
pub mod rest;
pub mod standard;

pub use layered::LayerPermission;
pub use rest::{match_path, RestPermission};
pub use standard::StdPermission;

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Capability compared via identity and a match predicate
pub trait Permission: fmt::Debug + Send + Sync + 'static {
    /// Identity of the permission
    fn id(&self) -> &str;

    /// Whether holding `self` grants `other`
    ///
    /// `self` is the granted permission, `other` the one being queried.
    fn matches(&self, other: &dyn Permission) -> bool;

    /// Concrete value, for variants that compare structurally
    fn as_any(&self) -> &dyn Any;

    /// Wrap into a shared handle for assignment to a role
    fn into_ref(self) -> PermissionRef
    where
        Self: Sized,
    {
        Arc::new(self)
    }
}

/// Shared handle to a permission of any variant
pub type PermissionRef = Arc<dyn Permission>;

/// Permissions keyed by identity
pub type Permissions = HashMap<String, PermissionRef>;
