// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the implist registry.
//!
//! This crate provides the data model shared by the registry data source,
//! the publisher, and any consumer that renders implementor lists: library
//! unit identifiers, implementor entries, and the immutable implementor map.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ImplistError;
pub use types::{
    ImplementorEntry, ImplementorMap, ImplementorMapBuilder, ItemRef, LibraryUnitId, RepublishPolicy,
};
