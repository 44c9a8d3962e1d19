// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Implementor registry data and its hand-off to a rendering consumer.
//!
//! The registry data side builds an immutable [`ImplementorMap`](implist_core::ImplementorMap)
//! once. The publisher side hands it to whichever consumer cares, regardless
//! of whether that consumer initialized before or after the data was built:
//! the publisher checks for an installed callback, the consumer checks for a
//! pending map, and exactly one of the two paths delivers it.

pub mod catalog;
pub mod handoff;
pub mod source;

pub use catalog::{builtin_implementors, search_implementors};
pub use handoff::{
    global, init_global, install_consumer, publish, publish_builtin, take_pending, Delivery,
    HandoffCell, HandoffPhase, ImplementorConsumer,
};
pub use source::{load_listing, parse_listing};
