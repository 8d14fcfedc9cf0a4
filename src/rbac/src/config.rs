//! Configuration for permission construction

use crate::error::{RbacError, Result};
use crate::permission::layered::{LayerPermission, DEFAULT_SEPARATOR};
use tracing::warn;

/// Environment variable overriding the layered-permission separator
pub const LAYER_SEPARATOR_ENV: &str = "RBAC_LAYER_SEPARATOR";

/// Permission construction settings
///
/// The separator is only a default for permissions built through
/// [`RbacConfig::layer`]; every [`LayerPermission`] keeps its own separator,
/// so permissions built under different configurations can share a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RbacConfig {
    /// Separator between layers of a layered permission
    pub layer_separator: String,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            layer_separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl RbacConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layered-permission separator
    pub fn with_layer_separator(mut self, separator: impl Into<String>) -> Self {
        self.layer_separator = separator.into();
        self
    }

    /// Load configuration from the environment
    ///
    /// Environment variables:
    /// - `RBAC_LAYER_SEPARATOR` - layered-permission separator (default: `:`)
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var(LAYER_SEPARATOR_ENV) {
            Ok(separator) => Self::default().with_layer_separator(separator),
            Err(std::env::VarError::NotPresent) => Self::default(),
            Err(std::env::VarError::NotUnicode(_)) => {
                warn!(var = LAYER_SEPARATOR_ENV, "ignoring non-unicode value");
                return Err(RbacError::InvalidConfig(format!(
                    "{} is not valid unicode",
                    LAYER_SEPARATOR_ENV
                )));
            }
        };

        config.validate().map_err(|e| {
            warn!(var = LAYER_SEPARATOR_ENV, error = %e, "rejected configuration");
            e
        })?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.layer_separator.is_empty() {
            return Err(RbacError::InvalidConfig(
                "Layer separator cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Build a layered permission using the configured separator
    pub fn layer(&self, id: impl Into<String>) -> LayerPermission {
        LayerPermission::with_separator(id, self.layer_separator.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::Permission;

    #[test]
    fn test_default_config() {
        let config = RbacConfig::default();
        assert_eq!(config.layer_separator, ":");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_separator_rejected() {
        let config = RbacConfig::new().with_layer_separator("");
        assert!(matches!(config.validate(), Err(RbacError::InvalidConfig(_))));
    }

    #[test]
    fn test_layer_uses_configured_separator() {
        let config = RbacConfig::new().with_layer_separator(".");
        let granted = config.layer("admin");
        let queried = config.layer("admin.users.edit");

        assert_eq!(granted.separator(), ".");
        assert!(granted.matches(&queried));
    }

    #[test]
    fn test_from_env() {
        // Only this test touches the variable.
        std::env::set_var(LAYER_SEPARATOR_ENV, "/");
        let config = RbacConfig::from_env().unwrap();
        assert_eq!(config.layer_separator, "/");

        std::env::set_var(LAYER_SEPARATOR_ENV, "");
        assert!(RbacConfig::from_env().is_err());

        std::env::remove_var(LAYER_SEPARATOR_ENV);
        let config = RbacConfig::from_env().unwrap();
        assert_eq!(config, RbacConfig::default());
    }
}
