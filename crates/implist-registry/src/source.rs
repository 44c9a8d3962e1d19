// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Implementor listings produced by an external documentation generator.
//!
//! A listing is a JSON object keyed by library unit, each value an array of
//! entries in render order:
//!
//! ```json
//! { "chain": [ { "trait_ref": { "name": "Serializable", "href": "..." },
//!                "implementor": { "name": "Block", "href": "..." } } ],
//!   "script": [] }
//! ```
//!
//! Files ending in `.toml` are read as TOML with the same shape. The content is
//! trusted: only what deserialization requires is checked.

use std::path::Path;

use implist_core::{ImplementorMap, ImplistError};

/// Parse a JSON listing from a string.
pub fn parse_listing(json: &str) -> Result<ImplementorMap, ImplistError> {
    parse_json(json, "<inline>")
}

/// Read and parse a listing file.
pub fn load_listing(path: &Path) -> Result<ImplementorMap, ImplistError> {
    let display_path = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ImplistError::Listing {
        path: display_path.clone(),
        message: e.to_string(),
    })?;

    let map = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| ImplistError::Listing {
            path: display_path.clone(),
            message: e.to_string(),
        })?,
        _ => parse_json(&content, &display_path)?,
    };

    tracing::debug!(
        path = %display_path,
        units = map.len(),
        entries = map.entry_count(),
        "loaded implementor listing"
    );
    Ok(map)
}

fn parse_json(json: &str, origin: &str) -> Result<ImplementorMap, ImplistError> {
    serde_json::from_str(json).map_err(|e| ImplistError::Listing {
        path: origin.to_string(),
        message: e.to_string(),
    })
}
