// SPDX-License-Identifier: MPL-2.0
//! Global lifecycle observer.

use crate::message::Message;

/// Observer notified for every message, transient or permanent.
///
/// All methods default to no-ops. Per-message callbacks run first, then the
/// delegate.
pub trait MessageDelegate {
    /// Called before the entrance animation starts.
    fn will_display(&mut self, _message: &Message) {}

    /// Called once the message is fully displayed.
    fn did_display(&mut self, _message: &Message) {}

    /// Called after the exit animation, just before the message is released.
    fn did_dismiss(&mut self, _message: &Message) {}
}
