// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./implist.toml` > `~/.config/implist/implist.toml` > `/etc/implist/implist.toml`
//! with environment variable overrides via `IMPLIST_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ImplistConfig;

const SYSTEM_CONFIG: &str = "/etc/implist/implist.toml";
const LOCAL_CONFIG: &str = "implist.toml";

/// Config files in merge order, lowest precedence first.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("implist").join(LOCAL_CONFIG));
    }
    paths.push(PathBuf::from(LOCAL_CONFIG));
    paths
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/implist/implist.toml`
/// 3. `~/.config/implist/implist.toml`
/// 4. `./implist.toml`
/// 5. `IMPLIST_*` environment variables
pub fn load_config() -> Result<ImplistConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<ImplistConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ImplistConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ImplistConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ImplistConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    config_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(ImplistConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Environment provider with explicit section mapping.
///
/// `Env::split("_")` would turn `IMPLIST_REGISTRY_LISTING_PATH` into
/// `registry.listing.path`; only the first underscore separates the section.
fn env_provider() -> Env {
    Env::prefixed("IMPLIST_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("logging_", "logging.", 1)
            .replacen("registry_", "registry.", 1);
        mapped.into()
    })
}
