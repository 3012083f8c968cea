// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types recorded by the controller.

use crate::message::MessageId;
use std::time::Instant;

/// What happened to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationEventKind {
    /// Appended to the queue because another message was current.
    Enqueued,
    /// Became current; the entrance animation is about to start.
    WillDisplay,
    /// Entrance animation completed.
    DidDisplay,
    /// A dismissal was requested.
    DismissRequested {
        /// Whether an in-flight entrance was cut short.
        forced: bool,
    },
    /// Exit animation completed and the message was released.
    DidDismiss,
    /// Removed from the queue before ever being displayed.
    Cancelled,
    /// A permanent message started its entrance.
    PermanentShown,
    /// A permanent message finished its exit.
    PermanentDismissed,
}

/// A single lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub message: MessageId,
    pub kind: PresentationEventKind,
}

impl PresentationEvent {
    /// Creates a new event with the current timestamp.
    #[must_use]
    pub fn new(message: MessageId, kind: PresentationEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            message,
            kind,
        }
    }
}
