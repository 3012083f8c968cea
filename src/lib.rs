// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` is the presentation core of an in-app toast notification
//! system.
//!
//! It decides which message is on screen and when: transient messages are
//! shown one at a time in strict FIFO order and auto-dismissed after their
//! duration, while permanent messages are shown alongside them until
//! dismissed. Views, animations and timers are external collaborators
//! reached through the traits in [`port`].

#![doc(html_root_url = "https://docs.rs/toast_queue/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod infrastructure;
pub mod message;
pub mod port;
pub mod presentation;
pub mod testing;
pub mod theme;
