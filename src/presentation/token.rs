// SPDX-License-Identifier: MPL-2.0
//! One-shot tokens exchanged with the renderer and the timer.
//!
//! A [`Completion`] is handed to the renderer with every animation command
//! and must be given back to [`MessageController::complete`] once the
//! animation ends. It is not `Clone`, so each completion can be delivered at
//! most once. Both tokens carry the generation of the message they belong
//! to; the controller ignores tokens from an earlier generation.
//!
//! [`MessageController::complete`]: super::MessageController::complete

use crate::message::MessageId;

/// Counter bumped every time a transient message becomes current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Which animation a completion reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Entrance,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Lane {
    Transient(Generation),
    Permanent,
}

/// Completion token for a single entrance or exit animation.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a completion must be handed back to the controller when the animation ends"]
pub struct Completion {
    message: MessageId,
    transition: Transition,
    lane: Lane,
}

impl Completion {
    pub(crate) fn new(message: MessageId, transition: Transition, lane: Lane) -> Self {
        Self {
            message,
            transition,
            lane,
        }
    }

    /// Message whose animation this completion belongs to.
    #[must_use]
    pub fn message(&self) -> MessageId {
        self.message
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Whether the completion belongs to a permanent message.
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        matches!(self.lane, Lane::Permanent)
    }

    pub(crate) fn lane(&self) -> Lane {
        self.lane
    }
}

/// Identifies one armed auto-dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    message: MessageId,
    generation: Generation,
}

impl TimerToken {
    pub(crate) fn new(message: MessageId, generation: Generation) -> Self {
        Self {
            message,
            generation,
        }
    }

    #[must_use]
    pub fn message(self) -> MessageId {
        self.message
    }

    #[must_use]
    pub fn generation(self) -> Generation {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_advance() {
        let first = Generation::default();
        assert!(first.next() > first);
        assert_eq!(first.next().value(), 1);
    }

    #[test]
    fn timer_tokens_differ_across_generations() {
        let id = MessageId::new();
        let g = Generation::default();
        assert_ne!(TimerToken::new(id, g), TimerToken::new(id, g.next()));
    }

    #[test]
    fn completion_reports_its_lane() {
        let id = MessageId::new();
        let permanent = Completion::new(id, Transition::Exit, Lane::Permanent);
        let transient = Completion::new(
            id,
            Transition::Entrance,
            Lane::Transient(Generation::default()),
        );
        assert!(permanent.is_permanent());
        assert!(!transient.is_permanent());
        assert_eq!(transient.transition(), Transition::Entrance);
        assert_eq!(permanent.message(), id);
    }
}
