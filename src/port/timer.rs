// SPDX-License-Identifier: MPL-2.0
//! Timer port definition.

use crate::presentation::TimerToken;
use std::time::Duration;

/// One-shot timers for auto-dismissal.
///
/// When a timer elapses, the host passes its token to
/// [`MessageController::on_timer`](crate::presentation::MessageController::on_timer)
/// on the UI thread.
pub trait Timer {
    /// Arms a timer that fires `token` after `after`.
    fn arm(&mut self, token: TimerToken, after: Duration);

    /// Cancels a timer. Unknown or already fired tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}
