// SPDX-License-Identifier: MPL-2.0
//! FIFO backlog of messages waiting for the current one to finish.

use crate::message::{Message, MessageId};
use std::collections::VecDeque;

/// Pending transient messages, oldest first.
///
/// No capacity limit and no deduplication: two messages with the same
/// title are two separate display events.
#[derive(Debug, Default)]
pub struct PresentationQueue {
    pending: VecDeque<Message>,
}

impl PresentationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message at the tail.
    pub fn push_back(&mut self, message: Message) {
        self.pending.push_back(message);
    }

    /// Removes and returns the oldest message.
    pub fn pop_front(&mut self) -> Option<Message> {
        self.pending.pop_front()
    }

    /// Removes a specific message, preserving the order of the others.
    pub fn remove(&mut self, id: MessageId) -> Option<Message> {
        let pos = self.pending.iter().position(|m| m.id() == id)?;
        self.pending.remove(pos)
    }

    #[must_use]
    pub fn contains(&self, id: MessageId) -> bool {
        self.pending.iter().any(|m| m.id() == id)
    }

    /// Iterates in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.pending.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes every pending message, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Message> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;

    fn msg(title: &str) -> Message {
        Message::new(title, None, MessageKind::Default)
    }

    #[test]
    fn pops_in_insertion_order() {
        let mut queue = PresentationQueue::new();
        queue.push_back(msg("a"));
        queue.push_back(msg("b"));
        queue.push_back(msg("c"));

        let titles: Vec<_> = std::iter::from_fn(|| queue.pop_front())
            .map(|m| m.title().to_string())
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut queue = PresentationQueue::new();
        queue.push_back(msg("same"));
        queue.push_back(msg("same"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut queue = PresentationQueue::new();
        let middle = msg("b");
        let middle_id = middle.id();
        queue.push_back(msg("a"));
        queue.push_back(middle);
        queue.push_back(msg("c"));

        let removed = queue.remove(middle_id).expect("message should be queued");
        assert_eq!(removed.title(), "b");
        assert!(!queue.contains(middle_id));
        let titles: Vec<_> = queue.iter().map(Message::title).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn remove_unknown_returns_none() {
        let mut queue = PresentationQueue::new();
        queue.push_back(msg("a"));
        assert!(queue.remove(MessageId::new()).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut queue = PresentationQueue::new();
        assert!(queue.pop_front().is_none());
    }
}
