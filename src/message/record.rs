// SPDX-License-Identifier: MPL-2.0
//! The message record handed to the controller.

use super::duration::DisplayDuration;
use super::types::{HostId, ImageHandle, MessageId, MessageKind, Position};
use std::fmt;

/// Per-message hook, called with the message it belongs to.
pub type MessageCallback = Box<dyn FnMut(&Message)>;

/// Lifecycle point a per-message hook is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    WillDisplay,
    DidDisplay,
    DidDismiss,
}

#[derive(Default)]
struct Callbacks {
    on_will_display: Option<MessageCallback>,
    on_did_display: Option<MessageCallback>,
    on_did_dismiss: Option<MessageCallback>,
}

impl Callbacks {
    fn slot(&mut self, hook: Hook) -> &mut Option<MessageCallback> {
        match hook {
            Hook::WillDisplay => &mut self.on_will_display,
            Hook::DidDisplay => &mut self.on_did_display,
            Hook::DidDismiss => &mut self.on_did_dismiss,
        }
    }
}

/// A notification waiting for, or going through, presentation.
///
/// Content is immutable once built. Messages are moved into the controller
/// and never cloned, so each one is displayed at most once.
pub struct Message {
    id: MessageId,
    title: String,
    subtitle: Option<String>,
    kind: MessageKind,
    position: Position,
    duration: DisplayDuration,
    image: Option<ImageHandle>,
    host: Option<HostId>,
    dismissible_by_user: bool,
    callbacks: Callbacks,
}

impl Message {
    /// Starts building a message with the given title and kind.
    pub fn builder(title: impl Into<String>, kind: MessageKind) -> MessageBuilder {
        MessageBuilder::new(title, kind)
    }

    /// Creates a message with default settings.
    pub fn new(title: impl Into<String>, subtitle: Option<String>, kind: MessageKind) -> Self {
        let mut builder = MessageBuilder::new(title, kind);
        builder.subtitle = subtitle;
        builder.build()
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    /// Host explicitly requested for this message, if any.
    #[must_use]
    pub fn host(&self) -> Option<HostId> {
        self.host
    }

    #[must_use]
    pub fn is_dismissible_by_user(&self) -> bool {
        self.dismissible_by_user
    }

    /// Runs the hook registered for `hook`, if any.
    ///
    /// The callback is taken out for the call so it can borrow the message.
    pub(crate) fn fire(&mut self, hook: Hook) {
        if let Some(mut callback) = self.callbacks.slot(hook).take() {
            callback(self);
            *self.callbacks.slot(hook) = Some(callback);
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("kind", &self.kind)
            .field("position", &self.position)
            .field("duration", &self.duration)
            .field("image", &self.image)
            .field("host", &self.host)
            .field("dismissible_by_user", &self.dismissible_by_user)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Message`].
#[must_use]
pub struct MessageBuilder {
    title: String,
    subtitle: Option<String>,
    kind: MessageKind,
    position: Position,
    duration: DisplayDuration,
    image: Option<ImageHandle>,
    host: Option<HostId>,
    dismissible_by_user: bool,
    callbacks: Callbacks,
}

impl MessageBuilder {
    fn new(title: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            kind,
            position: Position::default(),
            duration: DisplayDuration::default(),
            image: None,
            host: None,
            dismissible_by_user: true,
            callbacks: Callbacks::default(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }

    /// Shows the message in `host` instead of the controller's default host.
    pub fn host(mut self, host: HostId) -> Self {
        self.host = Some(host);
        self
    }

    /// Whether a user tap or swipe may dismiss the message (default `true`).
    pub fn dismissible_by_user(mut self, dismissible: bool) -> Self {
        self.dismissible_by_user = dismissible;
        self
    }

    pub fn on_will_display(mut self, callback: impl FnMut(&Message) + 'static) -> Self {
        self.callbacks.on_will_display = Some(Box::new(callback));
        self
    }

    pub fn on_did_display(mut self, callback: impl FnMut(&Message) + 'static) -> Self {
        self.callbacks.on_did_display = Some(Box::new(callback));
        self
    }

    pub fn on_did_dismiss(mut self, callback: impl FnMut(&Message) + 'static) -> Self {
        self.callbacks.on_did_dismiss = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Message {
        Message {
            id: MessageId::new(),
            title: self.title,
            subtitle: self.subtitle,
            kind: self.kind,
            position: self.position,
            duration: self.duration,
            image: self.image,
            host: self.host,
            dismissible_by_user: self.dismissible_by_user,
            callbacks: self.callbacks,
        }
    }
}
