//! Exact-match permission

use super::Permission;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Permission that only matches an identical identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StdPermission {
    id: String,
}

impl StdPermission {
    /// Create a new permission
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Permission for StdPermission {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, other: &dyn Permission) -> bool {
        self.id == other.id()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for StdPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::LayerPermission;

    #[test]
    fn test_exact_match() {
        let p = StdPermission::new("document:read");
        assert!(p.matches(&StdPermission::new("document:read")));
        assert!(!p.matches(&StdPermission::new("document:write")));
    }

    #[test]
    fn test_matches_any_variant_by_identity() {
        let p = StdPermission::new("admin");
        assert!(p.matches(&LayerPermission::new("admin")));
        assert!(!p.matches(&LayerPermission::new("admin:users")));
    }

    #[test]
    fn test_display() {
        assert_eq!(StdPermission::new("reports").to_string(), "reports");
    }
}
