// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the implist registry.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use implist_core::RepublishPolicy;
use serde::{Deserialize, Serialize};

/// Top-level implist configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ImplistConfig {
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Registry data and hand-off settings.
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Registry data and hand-off configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// What the hand-off cell does with a map published after delivery.
    #[serde(default)]
    pub republish: RepublishPolicy,

    /// Listing file to publish instead of the built-in implementor data.
    #[serde(default)]
    pub listing_path: Option<String>,
}
