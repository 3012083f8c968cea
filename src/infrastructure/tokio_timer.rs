// SPDX-License-Identifier: MPL-2.0
//! Timer adapter backed by the tokio runtime.
//!
//! Each armed timer is a task sleeping on the runtime. When it wakes, the
//! token is sent on an unbounded channel; the host drains the receiver on
//! its UI thread and hands every token to
//! [`MessageController::on_timer`](crate::presentation::MessageController::on_timer).

use crate::port::Timer;
use crate::presentation::TimerToken;
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// [`Timer`] that sleeps on a tokio runtime.
#[derive(Debug)]
pub struct TokioTimer {
    runtime: Handle,
    fired: UnboundedSender<TimerToken>,
    pending: HashMap<TimerToken, JoinHandle<()>>,
}

impl TokioTimer {
    /// Creates a timer spawning onto `runtime`, and the receiver fired
    /// tokens arrive on.
    #[must_use]
    pub fn new(runtime: Handle) -> (Self, UnboundedReceiver<TimerToken>) {
        let (fired, receiver) = mpsc::unbounded_channel();
        let timer = Self {
            runtime,
            fired,
            pending: HashMap::new(),
        };
        (timer, receiver)
    }

    /// Number of timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending
            .values()
            .filter(|task| !task.is_finished())
            .count()
    }
}

impl Timer for TokioTimer {
    fn arm(&mut self, token: TimerToken, after: Duration) {
        self.pending.retain(|_, task| !task.is_finished());

        let fired = self.fired.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            // Receiver gone means the host shut down; nothing left to notify.
            let _ = fired.send(token);
        });
        if let Some(previous) = self.pending.insert(token, task) {
            previous.abort();
        }
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(task) = self.pending.remove(&token) {
            task.abort();
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageId;
    use crate::presentation::Generation;

    fn token() -> TimerToken {
        TimerToken::new(MessageId::new(), Generation::default())
    }

    #[tokio::test]
    async fn fired_token_is_delivered() {
        let (mut timer, mut fired) = TokioTimer::new(Handle::current());
        let token = token();
        timer.arm(token, Duration::from_millis(10));

        let received = tokio::time::timeout(Duration::from_secs(2), fired.recv())
            .await
            .expect("timer should fire");
        assert_eq!(received, Some(token));
    }

    #[tokio::test]
    async fn cancelled_token_never_arrives() {
        let (mut timer, mut fired) = TokioTimer::new(Handle::current());
        let token = token();
        timer.arm(token, Duration::from_millis(20));
        timer.cancel(token);

        let outcome = tokio::time::timeout(Duration::from_millis(150), fired.recv()).await;
        assert!(outcome.is_err(), "cancelled timer must not fire");
        assert_eq!(timer.pending_count(), 0);
    }

    #[tokio::test]
    async fn timers_fire_in_deadline_order() {
        let (mut timer, mut fired) = TokioTimer::new(Handle::current());
        let late = token();
        let early = token();
        timer.arm(late, Duration::from_millis(80));
        timer.arm(early, Duration::from_millis(10));

        assert_eq!(fired.recv().await, Some(early));
        assert_eq!(fired.recv().await, Some(late));
    }
}
