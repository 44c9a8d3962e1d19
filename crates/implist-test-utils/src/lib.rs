// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for implist integration tests.
//!
//! # Components
//!
//! - [`RecordingConsumer`] - Consumer callback that captures every delivered map

pub mod recording_consumer;

pub use recording_consumer::RecordingConsumer;
