// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Load-order independent hand-off of an implementor map to its consumer.
//!
//! The registry data and the consumer that renders it initialize
//! independently. Neither owns the [`HandoffCell`] between them:
//!
//! - the publisher checks for an installed consumer and calls it right away,
//!   or parks the map in the pending slot;
//! - the consumer installs its callback and drains the pending slot in the
//!   same step.
//!
//! Each check-and-act runs under the cell's lock, so whichever side arrives
//! second performs the delivery and the map is delivered exactly once.
//! Callbacks always run after the lock is released, on the calling thread.
//!
//! ```text
//!            publish                    install_consumer
//!   Idle ──────────────► DataPending ─────────────────────┐
//!     │                                                    ▼
//!     └─────────────────► ConsumerReady ──────────────► Delivered
//!      install_consumer                  publish
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use implist_core::{ImplementorMap, RepublishPolicy};
use strum::Display;
use tracing::debug;

use crate::catalog::builtin_implementors;

/// Receives the implementor map once it is available.
pub trait ImplementorConsumer: Send + Sync {
    fn receive(&self, map: Arc<ImplementorMap>);
}

impl<F> ImplementorConsumer for F
where
    F: Fn(Arc<ImplementorMap>) + Send + Sync,
{
    fn receive(&self, map: Arc<ImplementorMap>) {
        self(map)
    }
}

/// Observable state of a [`HandoffCell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum HandoffPhase {
    /// Nothing published, no consumer installed.
    Idle,
    /// A consumer is waiting for data.
    ConsumerReady,
    /// A map is parked in the pending slot, waiting for a consumer.
    DataPending,
    /// The consumer has received a map.
    Delivered,
}

/// What a single publish or install call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Delivery {
    /// A consumer was invoked with the map during this call.
    Delivered,
    /// The other side is not there yet; the call left its half in the cell.
    Deferred,
    /// The map was published after delivery and dropped under
    /// [`RepublishPolicy::Ignore`].
    Dropped,
}

enum Slot {
    Idle,
    ConsumerReady(Arc<dyn ImplementorConsumer>),
    DataPending(Arc<ImplementorMap>),
    Delivered {
        consumer: Arc<dyn ImplementorConsumer>,
        map: Arc<ImplementorMap>,
    },
}

impl Slot {
    fn phase(&self) -> HandoffPhase {
        match self {
            Slot::Idle => HandoffPhase::Idle,
            Slot::ConsumerReady(_) => HandoffPhase::ConsumerReady,
            Slot::DataPending(_) => HandoffPhase::DataPending,
            Slot::Delivered { .. } => HandoffPhase::Delivered,
        }
    }
}

type Handover = Option<(Arc<dyn ImplementorConsumer>, Arc<ImplementorMap>)>;

/// Shared cell between one implementor map source and one consumer.
pub struct HandoffCell {
    slot: Mutex<Slot>,
    policy: RepublishPolicy,
}

impl HandoffCell {
    /// Create an idle cell with the default [`RepublishPolicy`].
    pub fn new() -> Self {
        Self::with_policy(RepublishPolicy::default())
    }

    pub fn with_policy(policy: RepublishPolicy) -> Self {
        Self {
            slot: Mutex::new(Slot::Idle),
            policy,
        }
    }

    pub fn policy(&self) -> RepublishPolicy {
        self.policy
    }

    /// Deliver `map` to the installed consumer, or park it in the pending slot.
    ///
    /// A map already pending is replaced (last write wins). A map published
    /// after delivery follows the cell's [`RepublishPolicy`].
    pub fn publish(&self, map: impl Into<Arc<ImplementorMap>>) -> Delivery {
        let map = map.into();
        let units = map.len();
        let mut slot = self.lock();

        let (next, handover, delivery): (Slot, Handover, Delivery) =
            match std::mem::replace(&mut *slot, Slot::Idle) {
                Slot::Idle => (Slot::DataPending(map), None, Delivery::Deferred),
                Slot::DataPending(previous) => {
                    debug!(
                        replaced_units = previous.len(),
                        units, "pending implementor map overwritten"
                    );
                    (Slot::DataPending(map), None, Delivery::Deferred)
                }
                Slot::ConsumerReady(consumer) => (
                    Slot::Delivered {
                        consumer: Arc::clone(&consumer),
                        map: Arc::clone(&map),
                    },
                    Some((consumer, map)),
                    Delivery::Delivered,
                ),
                Slot::Delivered {
                    consumer,
                    map: delivered,
                } => match self.policy {
                    RepublishPolicy::Ignore => {
                        debug!(units, "implementor map published after delivery, ignored");
                        (
                            Slot::Delivered {
                                consumer,
                                map: delivered,
                            },
                            None,
                            Delivery::Dropped,
                        )
                    }
                    RepublishPolicy::Redeliver => (
                        Slot::Delivered {
                            consumer: Arc::clone(&consumer),
                            map: Arc::clone(&map),
                        },
                        Some((consumer, map)),
                        Delivery::Delivered,
                    ),
                },
            };

        debug!(phase = %next.phase(), units, outcome = %delivery, "implementor map published");
        *slot = next;
        drop(slot);

        if let Some((consumer, map)) = handover {
            consumer.receive(map);
        }
        delivery
    }

    /// Install `consumer` and drain any map already pending.
    ///
    /// If a map is pending, the consumer receives it before this call returns.
    /// Installing over an existing consumer replaces it without re-delivering.
    pub fn install_consumer<C>(&self, consumer: C) -> Delivery
    where
        C: ImplementorConsumer + 'static,
    {
        let consumer: Arc<dyn ImplementorConsumer> = Arc::new(consumer);
        let mut slot = self.lock();

        let (next, handover, delivery): (Slot, Handover, Delivery) =
            match std::mem::replace(&mut *slot, Slot::Idle) {
                Slot::Idle | Slot::ConsumerReady(_) => {
                    (Slot::ConsumerReady(consumer), None, Delivery::Deferred)
                }
                Slot::DataPending(map) => (
                    Slot::Delivered {
                        consumer: Arc::clone(&consumer),
                        map: Arc::clone(&map),
                    },
                    Some((consumer, map)),
                    Delivery::Delivered,
                ),
                Slot::Delivered { map, .. } => {
                    (Slot::Delivered { consumer, map }, None, Delivery::Deferred)
                }
            };

        debug!(phase = %next.phase(), outcome = %delivery, "implementor consumer installed");
        *slot = next;
        drop(slot);

        if let Some((consumer, map)) = handover {
            consumer.receive(map);
        }
        delivery
    }

    /// Remove and return the pending map, leaving the cell idle.
    ///
    /// Returns `None` unless a map is pending.
    pub fn take_pending(&self) -> Option<Arc<ImplementorMap>> {
        let mut slot = self.lock();
        match std::mem::replace(&mut *slot, Slot::Idle) {
            Slot::DataPending(map) => {
                debug!(units = map.len(), "pending implementor map drained");
                Some(map)
            }
            other => {
                *slot = other;
                None
            }
        }
    }

    /// The pending map, if any, without draining it.
    pub fn pending(&self) -> Option<Arc<ImplementorMap>> {
        match &*self.lock() {
            Slot::DataPending(map) => Some(Arc::clone(map)),
            _ => None,
        }
    }

    /// The map most recently handed to the consumer.
    pub fn delivered(&self) -> Option<Arc<ImplementorMap>> {
        match &*self.lock() {
            Slot::Delivered { map, .. } => Some(Arc::clone(map)),
            _ => None,
        }
    }

    pub fn phase(&self) -> HandoffPhase {
        self.lock().phase()
    }

    /// Forget both sides and return to [`HandoffPhase::Idle`].
    pub fn reset(&self) {
        *self.lock() = Slot::Idle;
    }

    // Consumers never run under the lock, so a poisoned lock only means a
    // panic between two plain assignments; the slot is still consistent.
    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HandoffCell {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HandoffCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandoffCell")
            .field("phase", &self.phase())
            .field("policy", &self.policy)
            .finish()
    }
}

static GLOBAL: OnceLock<HandoffCell> = OnceLock::new();

/// Create the process-wide cell with `policy`.
///
/// Returns `false` if the cell already exists, in which case its policy is
/// left unchanged.
pub fn init_global(policy: RepublishPolicy) -> bool {
    let mut created = false;
    GLOBAL.get_or_init(|| {
        created = true;
        HandoffCell::with_policy(policy)
    });
    created
}

/// The process-wide cell, created with the default policy on first use.
pub fn global() -> &'static HandoffCell {
    GLOBAL.get_or_init(HandoffCell::new)
}

/// [`HandoffCell::publish`] on the process-wide cell.
pub fn publish(map: impl Into<Arc<ImplementorMap>>) -> Delivery {
    global().publish(map)
}

/// [`HandoffCell::install_consumer`] on the process-wide cell.
pub fn install_consumer<C>(consumer: C) -> Delivery
where
    C: ImplementorConsumer + 'static,
{
    global().install_consumer(consumer)
}

/// [`HandoffCell::take_pending`] on the process-wide cell.
pub fn take_pending() -> Option<Arc<ImplementorMap>> {
    global().take_pending()
}

/// Build the built-in implementor map and publish it on the process-wide cell.
pub fn publish_builtin() -> Delivery {
    publish(builtin_implementors())
}
