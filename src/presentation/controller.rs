// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine.
//!
//! The `MessageController` owns the queue, the current transient message,
//! the permanent set and the process-wide configuration (delegate, default
//! host, loaded theme). At most one transient message is ever between
//! `Displaying` and the end of `Dismissing`; everything else waits in the
//! queue and is shown in strict FIFO order.
//!
//! All methods take `&mut self` and are meant to run on the UI thread.
//! Renderer completions and timer firings come back as tokens through
//! [`MessageController::complete`] and [`MessageController::on_timer`].

use super::permanent::{PermanentMessageSet, PermanentPhase};
use super::queue::PresentationQueue;
use super::token::{Completion, Generation, Lane, TimerToken, Transition};
use crate::config::Config;
use crate::diagnostics::{
    CircularBuffer, HistoryCapacity, PresentationEvent, PresentationEventKind,
};
use crate::error::Result;
use crate::message::{
    DurationPolicy, Hook, HostId, Message, MessageBuilder, MessageId, MessageKind, Position,
};
use crate::port::{MessageDelegate, Renderer, Timer};
use log::{debug, trace, warn};

/// Phase of the current transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Entrance animation in flight.
    Displaying,
    /// Fully visible; the auto-dismiss timer is armed for finite durations.
    Shown,
    /// Exit animation in flight.
    Dismissing,
}

/// Observable state of the transient lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Displaying,
    Shown,
    Dismissing,
}

impl From<Option<Phase>> for State {
    fn from(phase: Option<Phase>) -> Self {
        match phase {
            None => State::Idle,
            Some(Phase::Displaying) => State::Displaying,
            Some(Phase::Shown) => State::Shown,
            Some(Phase::Dismissing) => State::Dismissing,
        }
    }
}

#[derive(Debug)]
struct Current {
    message: Message,
    phase: Phase,
    generation: Generation,
    timer: Option<TimerToken>,
    /// A graceful dismiss arrived during the entrance.
    dismiss_pending: bool,
}

/// Coordinates transient and permanent messages.
pub struct MessageController<R: Renderer, T: Timer> {
    renderer: R,
    timer: T,
    queue: PresentationQueue,
    current: Option<Current>,
    permanent: PermanentMessageSet,
    generation: Generation,
    delegate: Option<Box<dyn MessageDelegate>>,
    default_host: Option<HostId>,
    theme: Option<String>,
    policy: DurationPolicy,
    default_position: Position,
    prewarm_views: bool,
    history: CircularBuffer<PresentationEvent>,
}

impl<R: Renderer, T: Timer> MessageController<R, T> {
    /// Creates a controller with the default configuration.
    pub fn new(renderer: R, timer: T) -> Self {
        Self::with_config(renderer, timer, &Config::default())
    }

    /// Creates a controller from a loaded configuration.
    pub fn with_config(renderer: R, timer: T, config: &Config) -> Self {
        Self {
            renderer,
            timer,
            queue: PresentationQueue::new(),
            current: None,
            permanent: PermanentMessageSet::new(),
            generation: Generation::default(),
            delegate: None,
            default_host: None,
            theme: None,
            policy: config.timing.policy(),
            default_position: config.presentation.default_position,
            prewarm_views: config.presentation.prewarm_views,
            history: CircularBuffer::new(HistoryCapacity::new(
                config.diagnostics.history_capacity,
            )),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replaces the global delegate.
    pub fn set_delegate(&mut self, delegate: impl MessageDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    /// Removes and returns the global delegate.
    pub fn take_delegate(&mut self) -> Option<Box<dyn MessageDelegate>> {
        self.delegate.take()
    }

    #[must_use]
    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Sets the host used by messages that do not name one.
    pub fn set_default_host(&mut self, host: Option<HostId>) {
        self.default_host = host;
    }

    #[must_use]
    pub fn default_host(&self) -> Option<HostId> {
        self.default_host
    }

    /// Host a message will be shown in.
    #[must_use]
    pub fn resolved_host(&self, message: &Message) -> Option<HostId> {
        message.host().or(self.default_host)
    }

    /// Loads a named design through the renderer.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error if the design cannot be loaded; the
    /// previously loaded theme stays in effect.
    pub fn load_theme(&mut self, name: &str) -> Result<()> {
        self.renderer.load_theme(name)?;
        debug!("theme {name} loaded");
        self.theme = Some(name.to_string());
        Ok(())
    }

    /// Name of the last successfully loaded theme.
    #[must_use]
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    #[must_use]
    pub fn duration_policy(&self) -> DurationPolicy {
        self.policy
    }

    // =========================================================================
    // Message creation
    // =========================================================================

    /// Starts a message using the configured default position.
    pub fn builder(&self, title: impl Into<String>, kind: MessageKind) -> MessageBuilder {
        Message::builder(title, kind).position(self.default_position)
    }

    /// Creates a message for further customization by the caller.
    pub fn message(
        &self,
        title: impl Into<String>,
        subtitle: Option<&str>,
        kind: MessageKind,
    ) -> Message {
        let builder = self.builder(title, kind);
        match subtitle {
            Some(subtitle) => builder.subtitle(subtitle),
            None => builder,
        }
        .build()
    }

    /// Creates a message and displays or enqueues it right away.
    pub fn display_message(
        &mut self,
        title: impl Into<String>,
        subtitle: Option<&str>,
        kind: MessageKind,
    ) -> MessageId {
        let message = self.message(title, subtitle, kind);
        let id = message.id();
        self.display_or_enqueue(message);
        id
    }

    // =========================================================================
    // Transient lane
    // =========================================================================

    /// Displays `message` now if nothing is current, otherwise appends it to
    /// the queue.
    pub fn display_or_enqueue(&mut self, message: Message) {
        if self.current.is_none() {
            self.begin_display(message);
            return;
        }

        if self.prewarm_views {
            self.renderer.prepare(&message);
        }
        debug!(
            "message {} queued behind {} other(s)",
            message.id(),
            self.queue.len()
        );
        self.record(message.id(), PresentationEventKind::Enqueued);
        self.queue.push_back(message);
    }

    /// Dismisses the current message once it is fully displayed.
    ///
    /// Returns `false` if there is no current message.
    pub fn dismiss_current(&mut self) -> bool {
        self.dismiss_current_force(false)
    }

    /// Dismisses the current message, cutting its entrance short if `force`.
    ///
    /// Without `force`, a dismissal requested during the entrance is held
    /// until the entrance completes. Repeated requests while dismissing are
    /// no-ops. Returns `false` only if there is no current message.
    pub fn dismiss_current_force(&mut self, force: bool) -> bool {
        let Some(current) = self.current.as_mut() else {
            trace!("dismiss requested with no current message");
            return false;
        };

        let phase = current.phase;
        match phase {
            Phase::Displaying if !force => {
                debug!("message {} dismiss deferred until displayed", current.message.id());
                current.dismiss_pending = true;
            }
            Phase::Displaying => {
                self.renderer.cancel_entrance(current.message.id());
                self.start_exit(true);
            }
            Phase::Shown => self.start_exit(false),
            Phase::Dismissing => {}
        }
        true
    }

    /// Handles a user tap or swipe on a visible message.
    ///
    /// Returns `false` if the message is not on screen or does not accept
    /// user dismissal.
    pub fn dismiss_by_user(&mut self, id: MessageId) -> bool {
        if let Some(current) = self.current.as_ref().filter(|c| c.message.id() == id) {
            if !current.message.is_dismissible_by_user() {
                warn!("message {id} cannot be dismissed by the user");
                return false;
            }
            return self.dismiss_current();
        }

        match self.permanent.get(id).map(Message::is_dismissible_by_user) {
            Some(true) => self.dismiss_permanent(id),
            Some(false) => {
                warn!("permanent message {id} cannot be dismissed by the user");
                false
            }
            None => false,
        }
    }

    /// Removes a queued message before it is displayed.
    pub fn cancel_queued(&mut self, id: MessageId) -> bool {
        match self.queue.remove(id) {
            Some(message) => {
                self.release_queued(&message);
                true
            }
            None => false,
        }
    }

    /// Drops every queued message. The current message is not affected.
    ///
    /// Returns the number of messages removed.
    pub fn clear_queue(&mut self) -> usize {
        let drained: Vec<Message> = self.queue.drain().collect();
        for message in &drained {
            self.release_queued(message);
        }
        drained.len()
    }

    /// Returns true while a transient message is displaying, shown or
    /// dismissing. Permanent messages are not counted.
    #[must_use]
    pub fn is_displaying_message(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn state(&self) -> State {
        State::from(self.phase())
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.current.as_ref().map(|c| c.phase)
    }

    /// The transient message currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref().map(|c| &c.message)
    }

    /// Queued messages in display order.
    pub fn queued(&self) -> impl Iterator<Item = &Message> {
        self.queue.iter()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    // =========================================================================
    // Permanent lane
    // =========================================================================

    /// Shows a permanent message immediately, next to any transient one.
    ///
    /// Permanent messages never auto-dismiss.
    pub fn display_permanent(&mut self, mut message: Message) {
        let id = message.id();
        notify(&mut self.delegate, &mut message, Hook::WillDisplay);
        self.record(id, PresentationEventKind::PermanentShown);
        debug!("permanent message {id} entering");

        let host = self.resolved_host(&message);
        let done = Completion::new(id, Transition::Entrance, Lane::Permanent);
        self.renderer.begin_entrance(&message, host, done);
        self.permanent.insert(message);
    }

    /// Starts the exit of a permanent message.
    ///
    /// Returns `false` if the message is not in the permanent set.
    pub fn dismiss_permanent(&mut self, id: MessageId) -> bool {
        let Some((previous, message)) = self.permanent.begin_removal(id) else {
            return false;
        };

        match previous {
            PermanentPhase::Leaving => {}
            PermanentPhase::Entering | PermanentPhase::Visible => {
                if previous == PermanentPhase::Entering {
                    self.renderer.cancel_entrance(id);
                }
                debug!("permanent message {id} leaving");
                let done = Completion::new(id, Transition::Exit, Lane::Permanent);
                self.renderer.begin_exit(message, done);
            }
        }
        true
    }

    #[must_use]
    pub fn permanent(&self) -> &PermanentMessageSet {
        &self.permanent
    }

    // =========================================================================
    // Asynchronous events
    // =========================================================================

    /// Feeds a renderer completion back into the state machine.
    ///
    /// Returns `false` when the completion is stale (its animation was
    /// cancelled or its message is gone) and was ignored.
    pub fn complete(&mut self, done: Completion) -> bool {
        let id = done.message();
        match (done.lane(), done.transition()) {
            (Lane::Transient(generation), Transition::Entrance) => {
                self.entrance_completed(id, generation)
            }
            (Lane::Transient(generation), Transition::Exit) => {
                self.exit_completed(id, generation)
            }
            (Lane::Permanent, Transition::Entrance) => self.permanent_entrance_completed(id),
            (Lane::Permanent, Transition::Exit) => self.permanent_exit_completed(id),
        }
    }

    /// Handles an elapsed auto-dismiss timer.
    ///
    /// Tokens that no longer belong to the current message are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        let Some(current) = self.current.as_mut().filter(|c| c.timer == Some(token)) else {
            trace!("ignoring stale timer for message {}", token.message());
            return false;
        };
        current.timer = None;
        self.start_exit(false);
        true
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Lifecycle events, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &PresentationEvent> {
        self.history.iter()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn begin_display(&mut self, mut message: Message) {
        self.generation = self.generation.next();
        let generation = self.generation;
        let id = message.id();

        notify(&mut self.delegate, &mut message, Hook::WillDisplay);
        self.record(id, PresentationEventKind::WillDisplay);
        debug!("message {id} displaying (generation {})", generation.value());

        let host = self.resolved_host(&message);
        let done = Completion::new(id, Transition::Entrance, Lane::Transient(generation));
        self.renderer.begin_entrance(&message, host, done);
        self.current = Some(Current {
            message,
            phase: Phase::Displaying,
            generation,
            timer: None,
            dismiss_pending: false,
        });
    }

    fn entrance_completed(&mut self, id: MessageId, generation: Generation) -> bool {
        let Some(current) = self
            .current
            .as_mut()
            .filter(|c| c.generation == generation && c.phase == Phase::Displaying)
        else {
            trace!("ignoring stale entrance completion for message {id}");
            return false;
        };

        current.phase = Phase::Shown;
        notify(&mut self.delegate, &mut current.message, Hook::DidDisplay);
        self.history
            .push(PresentationEvent::new(id, PresentationEventKind::DidDisplay));

        if current.dismiss_pending {
            self.start_exit(false);
            return true;
        }

        match self
            .policy
            .resolve(current.message.duration(), current.message.subtitle())
        {
            Some(after) => {
                let token = TimerToken::new(id, generation);
                self.timer.arm(token, after);
                current.timer = Some(token);
                debug!("message {id} shown, dismissing in {after:?}");
            }
            None => debug!("message {id} shown until dismissed"),
        }
        true
    }

    fn start_exit(&mut self, forced: bool) {
        let Some(current) = self.current.as_mut() else {
            return;
        };
        let id = current.message.id();

        if let Some(token) = current.timer.take() {
            self.timer.cancel(token);
        }
        current.phase = Phase::Dismissing;
        current.dismiss_pending = false;
        self.history.push(PresentationEvent::new(
            id,
            PresentationEventKind::DismissRequested { forced },
        ));
        debug!("message {id} dismissing (forced: {forced})");

        let done = Completion::new(id, Transition::Exit, Lane::Transient(current.generation));
        self.renderer.begin_exit(&current.message, done);
    }

    fn exit_completed(&mut self, id: MessageId, generation: Generation) -> bool {
        let Some(mut current) = self
            .current
            .take_if(|c| c.generation == generation && c.phase == Phase::Dismissing)
        else {
            trace!("ignoring stale exit completion for message {id}");
            return false;
        };

        notify(&mut self.delegate, &mut current.message, Hook::DidDismiss);
        self.record(id, PresentationEventKind::DidDismiss);
        debug!("message {id} dismissed");
        drop(current);

        if let Some(next) = self.queue.pop_front() {
            self.begin_display(next);
        }
        true
    }

    fn permanent_entrance_completed(&mut self, id: MessageId) -> bool {
        match self.permanent.mark_visible(id) {
            Some(message) => {
                notify(&mut self.delegate, message, Hook::DidDisplay);
                true
            }
            None => {
                trace!("ignoring stale entrance completion for permanent message {id}");
                false
            }
        }
    }

    fn permanent_exit_completed(&mut self, id: MessageId) -> bool {
        match self.permanent.finish_removal(id) {
            Some(mut message) => {
                notify(&mut self.delegate, &mut message, Hook::DidDismiss);
                self.record(id, PresentationEventKind::PermanentDismissed);
                true
            }
            None => {
                trace!("ignoring stale exit completion for permanent message {id}");
                false
            }
        }
    }

    fn release_queued(&mut self, message: &Message) {
        if self.prewarm_views {
            self.renderer.discard(message.id());
        }
        self.record(message.id(), PresentationEventKind::Cancelled);
        debug!("queued message {} cancelled", message.id());
    }

    fn record(&mut self, id: MessageId, kind: PresentationEventKind) {
        if let Some(dropped) = self.history.push(PresentationEvent::new(id, kind)) {
            trace!("history full, dropped {:?} of message {}", dropped.kind, dropped.message);
        }
    }
}

/// Runs the per-message hook, then the delegate.
fn notify(delegate: &mut Option<Box<dyn MessageDelegate>>, message: &mut Message, hook: Hook) {
    message.fire(hook);
    if let Some(delegate) = delegate.as_deref_mut() {
        match hook {
            Hook::WillDisplay => delegate.will_display(message),
            Hook::DidDisplay => delegate.did_display(message),
            Hook::DidDismiss => delegate.did_dismiss(message),
        }
    }
}
