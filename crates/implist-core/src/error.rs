// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the implist registry.
//!
//! The publish path never fails. These errors cover the ambient surface
//! around it: configuration, loading an external listing, and lookups
//! requested from the command line.

use thiserror::Error;

/// The primary error type used across implist crates.
#[derive(Debug, Error)]
pub enum ImplistError {
    /// Configuration errors (invalid TOML, unknown keys, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// An implementor listing could not be read or parsed.
    #[error("invalid implementor listing {path}: {message}")]
    Listing { path: String, message: String },

    /// The requested library unit is not a key of the map.
    #[error("library unit not found: {unit}")]
    UnitNotFound { unit: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
