//! Layered (hierarchical) permission

use super::Permission;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Default separator between layers
pub const DEFAULT_SEPARATOR: &str = ":";

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

/// Permission over a hierarchical namespace such as `admin:users:edit`
///
/// A granted permission with fewer layers grants every permission nested
/// under it: `admin` grants `admin:users:edit`, while `admin:users` does not
/// grant `admin`. The separator belongs to each instance, so permissions with
/// different conventions can be assigned to the same role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerPermission {
    id: String,
    #[serde(default = "default_separator")]
    sep: String,
}

impl LayerPermission {
    /// Create a layered permission using the default `:` separator
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_separator(id, DEFAULT_SEPARATOR)
    }

    /// Create a layered permission with a custom separator
    ///
    /// An empty separator treats every character as its own layer.
    pub fn with_separator(id: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sep: separator.into(),
        }
    }

    /// Separator between layers
    pub fn separator(&self) -> &str {
        &self.sep
    }

    /// Layers of the identity, outermost first
    pub fn segments(&self) -> Vec<&str> {
        if self.sep.is_empty() {
            self.id.split_inclusive(|_: char| true).collect()
        } else {
            self.id.split(self.sep.as_str()).collect()
        }
    }
}

impl Permission for LayerPermission {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, other: &dyn Permission) -> bool {
        if self.id == other.id() {
            return true;
        }

        let Some(queried) = other.as_any().downcast_ref::<LayerPermission>() else {
            return false;
        };

        let granted = self.segments();
        let requested = queried.segments();

        // A finer grant cannot satisfy a coarser request
        if granted.len() > requested.len() {
            return false;
        }

        granted.iter().zip(requested.iter()).all(|(g, r)| g == r)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for LayerPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
