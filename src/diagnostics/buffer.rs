// SPDX-License-Identifier: MPL-2.0
//! Bounded storage for the presenter's lifecycle history.
//!
//! Once full, every new entry pushes the oldest one out and hands it back
//! to the caller, so the controller can note what it lost.

use crate::config::{DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY, MIN_HISTORY_CAPACITY};
use std::collections::VecDeque;

/// Number of events kept in a history buffer.
///
/// Always within `MIN_HISTORY_CAPACITY..=MAX_HISTORY_CAPACITY`.
///
/// # Example
///
/// ```
/// use toast_queue::diagnostics::HistoryCapacity;
///
/// assert_eq!(HistoryCapacity::new(500).value(), 500);
/// assert_eq!(HistoryCapacity::new(50_000).value(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Clamps `value` into the accepted range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(DEFAULT_HISTORY_CAPACITY)
    }
}

/// Ring of the most recent entries, oldest first.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    limit: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: HistoryCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Buffer holding `limit` entries without clamping. A zero limit still
    /// keeps the latest entry.
    #[must_use]
    pub fn with_raw_capacity(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Appends `entry`, returning the entry it displaced when full.
    pub fn push(&mut self, entry: T) -> Option<T> {
        let displaced = if self.entries.len() == self.limit {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        displaced
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Most recently pushed entry.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{PresentationEvent, PresentationEventKind};
    use crate::message::MessageId;

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(HistoryCapacity::new(0).value(), MIN_HISTORY_CAPACITY);
        assert_eq!(HistoryCapacity::new(100_000).value(), MAX_HISTORY_CAPACITY);
        assert_eq!(HistoryCapacity::default().value(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn full_history_hands_back_the_oldest_event() {
        let mut history = CircularBuffer::with_raw_capacity(2);
        let first = MessageId::new();
        let second = MessageId::new();

        assert!(history
            .push(PresentationEvent::new(first, PresentationEventKind::Enqueued))
            .is_none());
        assert!(history
            .push(PresentationEvent::new(second, PresentationEventKind::Enqueued))
            .is_none());

        let displaced = history
            .push(PresentationEvent::new(first, PresentationEventKind::WillDisplay))
            .expect("buffer was full");
        assert_eq!(displaced.message, first);
        assert_eq!(displaced.kind, PresentationEventKind::Enqueued);

        let kinds: Vec<_> = history.iter().map(|e| (e.message, e.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (second, PresentationEventKind::Enqueued),
                (first, PresentationEventKind::WillDisplay),
            ]
        );
        assert_eq!(
            history.latest().map(|e| e.kind),
            Some(PresentationEventKind::WillDisplay)
        );
    }

    #[test]
    fn clear_keeps_the_limit() {
        let mut history = CircularBuffer::new(HistoryCapacity::new(32));
        history.push('a');
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.capacity(), 32);
    }

    #[test]
    fn zero_limit_keeps_latest_entry() {
        let mut history = CircularBuffer::with_raw_capacity(0);
        history.push("a");
        assert_eq!(history.push("b"), Some("a"));
        assert_eq!(history.len(), 1);
    }
}
