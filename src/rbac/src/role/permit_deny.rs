//! Role with granted permissions and an overriding deny-set

use super::standard::StdRole;
use super::Role;
use crate::error::Result;
use crate::permission::{Permission, PermissionRef, Permissions};
use parking_lot::RwLock;
use tracing::{debug, trace};

/// Role whose denials override its grants
///
/// Granted permissions are matched with their own semantics (layered,
/// REST wildcard, ...). Denied permissions are matched by exact identity
/// only, and a denied identity is never permitted no matter how many grants
/// match it.
///
/// # Locking
///
/// The grant set and the deny-set each have their own reader/writer lock and
/// are never locked together. A `permit` racing with `deny` for the same
/// identity may therefore still return `true`.
///
/// # Denials are permanent
///
/// There is no operation to lift a denial. Revoking only removes grants.
///
/// # Example
///
/// ```rust
/// use cretoai_rbac::{Permission, PermitDenyRole, RestPermission};
///
/// # fn main() -> cretoai_rbac::Result<()> {
/// let role = PermitDenyRole::new("api-client");
/// role.assign(RestPermission::new("ALL", "/api/*").into_ref())?;
/// role.deny(RestPermission::new("DELETE", "/api/users").into_ref())?;
///
/// assert!(role.permit(&RestPermission::new("DELETE", "/api/groups")));
/// assert!(!role.permit(&RestPermission::new("DELETE", "/api/users")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PermitDenyRole {
    id: String,
    permissions: RwLock<Permissions>,
    denials: StdRole,
}

impl PermitDenyRole {
    /// Create a role with no grants and no denials
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            denials: StdRole::new(id.clone()),
            permissions: RwLock::new(Permissions::new()),
            id,
        }
    }

    /// Identity of the role
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Grant a permission, replacing any permission with the same identity
    pub fn assign(&self, permission: PermissionRef) -> Result<()> {
        debug!(role = %self.id, permission = permission.id(), "assign");
        self.permissions
            .write()
            .insert(permission.id().to_string(), permission);
        Ok(())
    }

    /// Deny the permission's identity for the lifetime of the role
    pub fn deny(&self, permission: PermissionRef) -> Result<()> {
        debug!(role = %self.id, permission = permission.id(), "deny");
        self.denials.assign(permission)
    }

    /// Remove the grant with the permission's identity, if present
    ///
    /// Denials are unaffected.
    pub fn revoke(&self, permission: &dyn Permission) -> Result<()> {
        debug!(role = %self.id, permission = permission.id(), "revoke");
        self.permissions.write().remove(permission.id());
        Ok(())
    }

    /// Whether the role grants the candidate permission
    ///
    /// A candidate with an empty identity is never permitted. A denied
    /// identity is rejected before any grant is consulted.
    pub fn permit(&self, candidate: &dyn Permission) -> bool {
        if candidate.id().is_empty() {
            trace!(role = %self.id, "empty candidate");
            return false;
        }

        if self.denials.reject(candidate) {
            trace!(role = %self.id, permission = candidate.id(), "denied");
            return false;
        }

        let permitted = self
            .permissions
            .read()
            .values()
            .any(|granted| granted.matches(candidate));

        trace!(role = %self.id, permission = candidate.id(), permitted, "decision");
        permitted
    }

    /// Whether the candidate's identity has been denied
    pub fn is_denied(&self, candidate: &dyn Permission) -> bool {
        self.denials.reject(candidate)
    }

    /// Snapshot of the granted permissions
    pub fn permissions(&self) -> Vec<PermissionRef> {
        self.permissions.read().values().cloned().collect()
    }

    /// Denied identities, sorted
    pub fn denials(&self) -> Vec<String> {
        self.denials.identities()
    }
}

impl Role for PermitDenyRole {
    fn id(&self) -> &str {
        PermitDenyRole::id(self)
    }

    fn assign(&self, permission: PermissionRef) -> Result<()> {
        PermitDenyRole::assign(self, permission)
    }

    fn permit(&self, candidate: &dyn Permission) -> bool {
        PermitDenyRole::permit(self, candidate)
    }

    fn revoke(&self, permission: &dyn Permission) -> Result<()> {
        PermitDenyRole::revoke(self, permission)
    }

    fn permissions(&self) -> Vec<PermissionRef> {
        PermitDenyRole::permissions(self)
    }
}
