// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the renderer and timer ports.
//!
//! `RecordingRenderer` keeps every command it receives and holds on to the
//! completion tokens so a test can decide when each animation "finishes".
//! `ManualTimer` runs on a virtual clock advanced explicitly.

use crate::error::Result;
use crate::message::{HostId, Message, MessageId};
use crate::port::{Renderer, Timer};
use crate::presentation::{Completion, TimerToken, Transition};
use crate::theme::{StyleProvider, ThemeRegistry};
use std::time::Duration;

/// A command received by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    Prepare(MessageId),
    Discard(MessageId),
    Entrance(MessageId, Option<HostId>),
    Exit(MessageId),
    CancelEntrance(MessageId),
}

/// Renderer that records commands instead of animating.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
    pending: Vec<Completion>,
    styles: ThemeRegistry,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `styles` to resolve theme names.
    #[must_use]
    pub fn with_styles(styles: ThemeRegistry) -> Self {
        Self {
            styles,
            ..Self::default()
        }
    }

    /// Every command received so far, in order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    #[must_use]
    pub fn styles(&self) -> &ThemeRegistry {
        &self.styles
    }

    /// Takes the pending entrance completion of `message`.
    pub fn take_entrance(&mut self, message: MessageId) -> Option<Completion> {
        self.take(message, Transition::Entrance)
    }

    /// Takes the pending exit completion of `message`.
    pub fn take_exit(&mut self, message: MessageId) -> Option<Completion> {
        self.take(message, Transition::Exit)
    }

    /// Peeks at the pending exit completion of `message`.
    #[must_use]
    pub fn pending_exit(&self, message: MessageId) -> Option<&Completion> {
        self.pending
            .iter()
            .find(|c| c.message() == message && c.transition() == Transition::Exit)
    }

    /// Number of completions not yet taken.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn take(&mut self, message: MessageId, transition: Transition) -> Option<Completion> {
        let pos = self
            .pending
            .iter()
            .position(|c| c.message() == message && c.transition() == transition)?;
        Some(self.pending.remove(pos))
    }
}

impl Renderer for RecordingRenderer {
    fn prepare(&mut self, message: &Message) {
        self.commands.push(RenderCommand::Prepare(message.id()));
    }

    fn discard(&mut self, message: MessageId) {
        self.commands.push(RenderCommand::Discard(message));
    }

    fn begin_entrance(&mut self, message: &Message, host: Option<HostId>, done: Completion) {
        self.commands
            .push(RenderCommand::Entrance(message.id(), host));
        self.pending.push(done);
    }

    fn begin_exit(&mut self, message: &Message, done: Completion) {
        self.commands.push(RenderCommand::Exit(message.id()));
        self.pending.push(done);
    }

    fn cancel_entrance(&mut self, message: MessageId) {
        self.commands.push(RenderCommand::CancelEntrance(message));
    }

    fn load_theme(&mut self, name: &str) -> Result<()> {
        self.styles.load(name)
    }
}

/// Timer driven by a virtual clock.
#[derive(Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    armed: Vec<(TimerToken, Duration)>,
    cancelled: Vec<TimerToken>,
    last_armed: Option<(TimerToken, Duration)>,
}

impl ManualTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent `arm` call, whether or not it has fired since.
    #[must_use]
    pub fn last_armed(&self) -> Option<(TimerToken, Duration)> {
        self.last_armed
    }

    #[must_use]
    pub fn is_armed(&self, token: TimerToken) -> bool {
        self.armed.iter().any(|(t, _)| *t == token)
    }

    #[must_use]
    pub fn was_cancelled(&self, token: TimerToken) -> bool {
        self.cancelled.contains(&token)
    }

    /// Number of timers still waiting to fire.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// Moves the clock forward and returns the tokens that became due, in
    /// deadline order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<_> = self
            .armed
            .iter()
            .filter(|(_, deadline)| *deadline <= now)
            .map(|(token, deadline)| (*deadline, *token))
            .collect();
        self.armed.retain(|(_, deadline)| *deadline > now);
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, token)| token).collect()
    }
}

impl Timer for ManualTimer {
    fn arm(&mut self, token: TimerToken, after: Duration) {
        self.armed.push((token, self.now + after));
        self.last_armed = Some((token, after));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.armed.retain(|(t, _)| *t != token);
        self.cancelled.push(token);
    }
}
