//! Standard role with a single set of granted permissions

use super::Role;
use crate::error::Result;
use crate::permission::{Permission, PermissionRef, Permissions};
use parking_lot::RwLock;
use tracing::debug;

/// Role holding a set of granted permissions keyed by identity
#[derive(Debug)]
pub struct StdRole {
    id: String,
    permissions: RwLock<Permissions>,
}

impl StdRole {
    /// Create an empty role
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            permissions: RwLock::new(Permissions::new()),
        }
    }

    /// Whether a permission with exactly the candidate's identity is assigned
    ///
    /// Unlike [`Role::permit`], the assigned permissions' own match
    /// semantics are ignored.
    pub fn reject(&self, candidate: &dyn Permission) -> bool {
        self.permissions.read().contains_key(candidate.id())
    }

    /// Identities of the assigned permissions, sorted
    pub fn identities(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.permissions.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of assigned permissions
    pub fn len(&self) -> usize {
        self.permissions.read().len()
    }

    /// Whether no permission is assigned
    pub fn is_empty(&self) -> bool {
        self.permissions.read().is_empty()
    }
}

impl Role for StdRole {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign(&self, permission: PermissionRef) -> Result<()> {
        debug!(role = %self.id, permission = permission.id(), "assign");
        self.permissions
            .write()
            .insert(permission.id().to_string(), permission);
        Ok(())
    }

    fn permit(&self, candidate: &dyn Permission) -> bool {
        self.permissions
            .read()
            .values()
            .any(|granted| granted.matches(candidate))
    }

    fn revoke(&self, permission: &dyn Permission) -> Result<()> {
        debug!(role = %self.id, permission = permission.id(), "revoke");
        self.permissions.write().remove(permission.id());
        Ok(())
    }

    fn permissions(&self) -> Vec<PermissionRef> {
        self.permissions.read().values().cloned().collect()
    }
}
