// SPDX-License-Identifier: MPL-2.0
//! Lifecycle history for the presenter.
//!
//! The controller records every transition in a memory-bounded circular
//! buffer. Hosts can inspect it to debug ordering problems, and tests use
//! it to assert display order.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`PresentationEvent`]: A timestamped transition of one message
//! - [`HistoryCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod events;

pub use buffer::{CircularBuffer, HistoryCapacity};
pub use events::{PresentationEvent, PresentationEventKind};
