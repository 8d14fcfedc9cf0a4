//! REST-style permission: HTTP verb(s) plus a wildcard path pattern

use super::Permission;
use crate::error::{RbacError, Result};
use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// Delimiter joining verb and path in a REST permission identity
pub const DELIMITER: &str = "<|>";

/// Verb that matches every action
pub const ALL_ACTIONS: &str = "ALL";

/// Separator between alternative verbs (`GET|HEAD`)
pub const ACTION_SEPARATOR: char = '|';

/// Permission over an HTTP verb and a path pattern
///
/// The verb is stored uppercase and the path lowercase. A granted path ending
/// in `/*` covers that segment and everything nested beneath it, so
/// `GET /api/*` grants `GET /api/users/5`. The verb may list alternatives
/// separated by `|`, or be `ALL`.
///
/// The identity is `VERB<|>path`. When both sides are `RestPermission`s the
/// stored fields are compared directly; the identity is only decoded for
/// other variants, where a verb or path containing `<|>` is ambiguous. Use
/// [`RestPermission::try_new`] to reject such input up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestPermission {
    action: String,
    path: String,
    id: String,
}

impl RestPermission {
    /// Create a REST permission, normalizing verb and path case
    pub fn new(action: impl AsRef<str>, path: impl AsRef<str>) -> Self {
        let action = action.as_ref().to_uppercase();
        let path = path.as_ref().to_lowercase();
        let id = format!("{}{}{}", action, DELIMITER, path);

        Self { action, path, id }
    }

    /// Create a REST permission, rejecting input the identity cannot encode
    pub fn try_new(action: impl AsRef<str>, path: impl AsRef<str>) -> Result<Self> {
        let (action, path) = (action.as_ref(), path.as_ref());

        if action.is_empty() {
            return Err(RbacError::InvalidInput("REST action cannot be empty".to_string()));
        }
        if path.is_empty() {
            return Err(RbacError::InvalidInput("REST path cannot be empty".to_string()));
        }
        for (name, value) in [("action", action), ("path", path)] {
            if value.contains(DELIMITER) {
                return Err(RbacError::InvalidInput(format!(
                    "REST {} '{}' contains reserved delimiter '{}'",
                    name, value, DELIMITER
                )));
            }
        }

        Ok(Self::new(action, path))
    }

    /// Normalized verb, possibly `ALL` or several verbs joined by `|`
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Normalized path pattern
    pub fn path(&self) -> &str {
        &self.path
    }

    fn allows_action(&self, action: &str) -> bool {
        self.action == ALL_ACTIONS || self.action.split(ACTION_SEPARATOR).any(|a| a == action)
    }
}

impl Permission for RestPermission {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, other: &dyn Permission) -> bool {
        let (action, path) = match other.as_any().downcast_ref::<RestPermission>() {
            Some(queried) => (queried.action.as_str(), queried.path.as_str()),
            None => {
                let mut parts = other.id().split(DELIMITER);
                match (parts.next(), parts.next()) {
                    (Some(action), Some(path)) => (action, path),
                    _ => return false,
                }
            }
        };

        self.allows_action(action) && match_path(path, &self.path)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for RestPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.action, self.path)
    }
}

/// Match a concrete path against a pattern that may end in `/*`
///
/// The query is collapsed one segment at a time (`/api/users/5` →
/// `/api/users/*` → `/api/*`) until it equals the pattern or has no `/` left.
/// Each step drops a segment, so the loop runs at most once per segment.
///
/// ```rust
/// use cretoai_rbac::match_path;
///
/// assert!(match_path("/a/b/c", "/a/*"));
/// assert!(match_path("/a", "/a"));
/// assert!(!match_path("/a/b", "/x/*"));
/// ```
pub fn match_path(query: &str, pattern: &str) -> bool {
    let mut current = Cow::Borrowed(query);

    while current != pattern {
        let trimmed = current.strip_suffix("/*").unwrap_or(current.as_ref());
        let Some(idx) = trimmed.rfind('/') else {
            return trimmed == pattern;
        };
        current = Cow::Owned(format!("{}/*", &trimmed[..idx]));
    }

    true
}
