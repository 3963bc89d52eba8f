//! Acting-user configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// User ID the CLI acts as. `--as` on the command line wins over this.
    #[serde(default)]
    pub user_id: String,
}

impl IdentityConfig {
    pub fn is_configured(&self) -> bool {
        !self.user_id.trim().is_empty()
    }

    /// The configured user ID.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when no user is set.
    pub fn require_user_id(&self) -> Result<&str, ConfigError> {
        if self.is_configured() {
            Ok(self.user_id.trim())
        } else {
            Err(ConfigError::NotConfigured {
                section: "identity".into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_user_is_not_configured() {
        let config = IdentityConfig {
            user_id: "  ".into(),
        };
        assert!(!config.is_configured());
        assert!(matches!(
            config.require_user_id(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn configured_user_is_trimmed() {
        let config = IdentityConfig {
            user_id: " usr-1a2b3c4d ".into(),
        };
        assert_eq!(config.require_user_id().unwrap(), "usr-1a2b3c4d");
    }
}
