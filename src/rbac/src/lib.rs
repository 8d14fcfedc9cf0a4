//! # CretoAI Permit/Deny Roles
//!
//! In-process authorization primitive: decides whether a permission is granted
//! to a role, with an overriding deny-list.
//!
//! ## Features
//!
//! - **Three matching strategies**: exact identity, layered namespaces
//!   (`admin:users:edit`), and REST verb + wildcard path (`GET /api/*`)
//! - **Open permission set**: any type implementing [`Permission`] can be assigned
//! - **Deny overrides permit**: a denied identity defeats every matching grant
//! - **Thread-safe roles**: reader/writer locking around grant and deny sets
//!
//! ## Example
//!
//! ```rust
//! use cretoai_rbac::{LayerPermission, Permission, PermitDenyRole, RestPermission};
//!
//! # fn main() -> cretoai_rbac::Result<()> {
//! let role = PermitDenyRole::new("editor");
//!
//! role.assign(LayerPermission::new("admin").into_ref())?;
//! role.assign(RestPermission::new("get", "/api/*").into_ref())?;
//!
//! assert!(role.permit(&LayerPermission::new("admin:users:edit")));
//! assert!(role.permit(&RestPermission::new("GET", "/api/users/5")));
//!
//! role.deny(LayerPermission::new("admin:users:edit").into_ref())?;
//! assert!(!role.permit(&LayerPermission::new("admin:users:edit")));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod permission;
pub mod role;

// Re-export commonly used types
pub use config::RbacConfig;
pub use error::{RbacError, Result};
pub use permission::{
    match_path, LayerPermission, Permission, PermissionRef, Permissions, RestPermission,
    StdPermission,
};
pub use role::{PermitDenyRole, Role, StdRole};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
