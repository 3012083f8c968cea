// SPDX-License-Identifier: MPL-2.0
//! Renderer port definition.
//!
//! The renderer owns views and animations. The controller never looks
//! inside it: it only issues commands and waits for the [`Completion`]
//! tokens to come back through [`MessageController::complete`].
//!
//! [`MessageController::complete`]: crate::presentation::MessageController::complete

use crate::error::{Result, ThemeError};
use crate::message::{HostId, Message, MessageId};
use crate::presentation::Completion;

/// Visual presentation of messages.
pub trait Renderer {
    /// Builds the view for a queued message ahead of time.
    ///
    /// Only called when view pre-warming is enabled. Views are otherwise
    /// built lazily in [`Renderer::begin_entrance`].
    fn prepare(&mut self, _message: &Message) {}

    /// Releases a view built by [`Renderer::prepare`] for a message that
    /// was removed from the queue before being displayed.
    fn discard(&mut self, _message: MessageId) {}

    /// Starts the entrance animation of `message` inside `host`.
    ///
    /// `host` is `None` when neither the message nor the controller names
    /// one; the renderer picks its own root in that case.
    fn begin_entrance(&mut self, message: &Message, host: Option<HostId>, done: Completion);

    /// Starts the exit animation of `message`.
    fn begin_exit(&mut self, message: &Message, done: Completion);

    /// Stops an in-flight entrance. Its completion will not be honoured.
    fn cancel_entrance(&mut self, message: MessageId);

    /// Loads a named design for subsequent messages.
    ///
    /// # Errors
    ///
    /// Renderers without theming reject every name.
    fn load_theme(&mut self, name: &str) -> Result<()> {
        Err(ThemeError::NotFound(name.to_string()).into())
    }
}
