// SPDX-License-Identifier: MPL-2.0
//! Permanent messages shown alongside the transient queue.
//!
//! The set only tracks membership and per-message phase. The controller
//! issues the renderer commands and fires the hooks.

use crate::message::{Message, MessageId};
use std::collections::BTreeMap;

/// Where a permanent message is in its own lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermanentPhase {
    /// Entrance animation in flight.
    Entering,
    /// Fully displayed.
    Visible,
    /// Exit animation in flight.
    Leaving,
}

#[derive(Debug)]
struct Entry {
    message: Message,
    phase: PermanentPhase,
}

/// Permanent messages keyed by identity.
///
/// Membership never depends on the transient queue or current slot, and any
/// number of entries may be on screen together.
#[derive(Debug, Default)]
pub struct PermanentMessageSet {
    entries: BTreeMap<MessageId, Entry>,
}

impl PermanentMessageSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message whose entrance has just started.
    pub(crate) fn insert(&mut self, message: Message) {
        self.entries.insert(
            message.id(),
            Entry {
                message,
                phase: PermanentPhase::Entering,
            },
        );
    }

    /// Moves an entering message to `Visible`.
    ///
    /// Returns `None` if the message is unknown or no longer entering.
    pub(crate) fn mark_visible(&mut self, id: MessageId) -> Option<&mut Message> {
        let entry = self.entries.get_mut(&id)?;
        if entry.phase != PermanentPhase::Entering {
            return None;
        }
        entry.phase = PermanentPhase::Visible;
        Some(&mut entry.message)
    }

    /// Moves a message to `Leaving`, returning its previous phase.
    pub(crate) fn begin_removal(&mut self, id: MessageId) -> Option<(PermanentPhase, &Message)> {
        let entry = self.entries.get_mut(&id)?;
        let previous = entry.phase;
        entry.phase = PermanentPhase::Leaving;
        Some((previous, &entry.message))
    }

    /// Drops a leaving message once its exit animation has completed.
    pub(crate) fn finish_removal(&mut self, id: MessageId) -> Option<Message> {
        if self.phase(id)? != PermanentPhase::Leaving {
            return None;
        }
        self.entries.remove(&id).map(|entry| entry.message)
    }

    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.entries.get(&id).map(|entry| &entry.message)
    }

    #[must_use]
    pub fn phase(&self, id: MessageId) -> Option<PermanentPhase> {
        self.entries.get(&id).map(|entry| entry.phase)
    }

    #[must_use]
    pub fn contains(&self, id: MessageId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Iterates over all permanent messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.values().map(|entry| &entry.message)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;

    fn permanent(title: &str) -> Message {
        Message::new(title, None, MessageKind::Warning)
    }

    #[test]
    fn inserted_messages_start_entering() {
        let mut set = PermanentMessageSet::new();
        let message = permanent("offline");
        let id = message.id();
        set.insert(message);

        assert_eq!(set.phase(id), Some(PermanentPhase::Entering));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn several_messages_coexist() {
        let mut set = PermanentMessageSet::new();
        set.insert(permanent("a"));
        set.insert(permanent("b"));
        set.insert(permanent("c"));
        assert_eq!(set.len(), 3);
        let titles: Vec<_> = set.iter().map(Message::title).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn mark_visible_only_from_entering() {
        let mut set = PermanentMessageSet::new();
        let message = permanent("a");
        let id = message.id();
        set.insert(message);

        assert!(set.mark_visible(id).is_some());
        assert!(set.mark_visible(id).is_none());
        assert_eq!(set.phase(id), Some(PermanentPhase::Visible));
    }

    #[test]
    fn removal_requires_leaving_phase() {
        let mut set = PermanentMessageSet::new();
        let message = permanent("a");
        let id = message.id();
        set.insert(message);

        assert!(set.finish_removal(id).is_none());

        let (previous, _) = set.begin_removal(id).expect("message is present");
        assert_eq!(previous, PermanentPhase::Entering);
        assert!(set.mark_visible(id).is_none());

        let removed = set.finish_removal(id).expect("message is leaving");
        assert_eq!(removed.title(), "a");
        assert!(set.is_empty());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut set = PermanentMessageSet::new();
        let id = MessageId::new();
        assert!(set.begin_removal(id).is_none());
        assert!(set.finish_removal(id).is_none());
        assert!(set.get(id).is_none());
    }
}
