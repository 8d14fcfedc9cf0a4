//! Error types for permit/deny roles

use thiserror::Error;

/// Role and permission errors
///
/// Role mutations return [`Result`] so that storage-backed roles can report
/// failures; the in-memory roles in this crate never produce one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RbacError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for role operations
pub type Result<T> = std::result::Result<T, RbacError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RbacError::InvalidInput("verb contains delimiter".to_string());
        assert_eq!(err.to_string(), "Invalid input: verb contains delimiter");

        let err = RbacError::InvalidConfig("empty separator".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: empty separator");
    }
}
