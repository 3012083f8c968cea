// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined
//! in [`crate::port`].
//!
//! # Available Adapters
//!
//! - [`tokio_timer`]: auto-dismiss timers on a tokio runtime (implements [`Timer`])
//!
//! [`Timer`]: crate::port::Timer

pub mod tokio_timer;

pub use tokio_timer::TokioTimer;
