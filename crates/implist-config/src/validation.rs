// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::ImplistConfig;

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &ImplistConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.logging.level.trim();
    if !LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{level}` is not one of: {}",
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if let Some(path) = &config.registry.listing_path
        && path.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "registry.listing_path must not be empty when set".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ImplistConfig::default()).is_ok());
    }

    #[test]
    fn unknown_log_level_rejected() {
        let mut config = ImplistConfig::default();
        config.logging.level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("logging.level `verbose`"));
    }

    #[test]
    fn empty_listing_path_rejected() {
        let mut config = ImplistConfig::default();
        config.registry.listing_path = Some("  ".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("registry.listing_path"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = ImplistConfig::default();
        config.logging.level = "loud".to_string();
        config.registry.listing_path = Some(String::new());
        assert_eq!(validate_config(&config).unwrap_err().len(), 2);
    }
}
