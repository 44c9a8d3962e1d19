// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording consumer for deterministic hand-off tests.
//!
//! `RecordingConsumer` hands out callbacks that capture each delivered
//! implementor map. Clones share the same capture buffer, so a test keeps one
//! handle for assertions while the hand-off cell owns the callback.

use std::sync::{Arc, Mutex};

use implist_core::ImplementorMap;

/// Captures implementor maps delivered to its callbacks.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsumer {
    received: Arc<Mutex<Vec<Arc<ImplementorMap>>>>,
}

impl RecordingConsumer {
    /// Create a consumer that has received nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that records every map it is called with.
    ///
    /// Any `Fn(Arc<ImplementorMap>) + Send + Sync` closure is accepted as a
    /// consumer by the hand-off cell.
    pub fn callback(&self) -> impl Fn(Arc<ImplementorMap>) + Send + Sync + 'static {
        let received = Arc::clone(&self.received);
        move |map: Arc<ImplementorMap>| {
            received
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(map);
        }
    }

    /// Number of times any callback was invoked.
    pub fn receive_count(&self) -> usize {
        self.received().len()
    }

    /// The most recently delivered map.
    pub fn last(&self) -> Option<Arc<ImplementorMap>> {
        self.received().last().cloned()
    }

    /// All delivered maps in delivery order.
    pub fn received(&self) -> Vec<Arc<ImplementorMap>> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
