//! Roles: aggregates of granted (and denied) permissions
//!
//! - [`StdRole`]: a plain set of granted permissions; also serves as the
//!   exact-identity deny-set of a [`PermitDenyRole`]
//! - [`PermitDenyRole`]: granted permissions plus a deny-set that overrides
//!   every matching grant
//!
//! Both are safe to share across threads; each guards its state with its own
//! reader/writer lock.

pub mod permit_deny;
pub mod standard;

pub use permit_deny::PermitDenyRole;
pub use standard::StdRole;

use crate::error::Result;
use crate::permission::{Permission, PermissionRef};

/// Role contract shared by all role types
pub trait Role: Send + Sync {
    /// Identity of the role
    fn id(&self) -> &str;

    /// Grant a permission, replacing any permission with the same identity
    fn assign(&self, permission: PermissionRef) -> Result<()>;

    /// Whether the role grants the candidate permission
    fn permit(&self, candidate: &dyn Permission) -> bool;

    /// Remove the permission with the candidate's identity, if present
    fn revoke(&self, permission: &dyn Permission) -> Result<()>;

    /// Snapshot of the granted permissions
    fn permissions(&self) -> Vec<PermissionRef>;
}
