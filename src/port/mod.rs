// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the collaborators the presenter drives.
//!
//! # Available Ports
//!
//! - [`renderer`]: view building and entrance/exit animations
//! - [`timer`]: one-shot auto-dismiss timers
//! - [`delegate`]: process-wide lifecycle observer
//!
//! # Design Notes
//!
//! - Ports are driven from the UI thread only; nothing here is `Send`
//! - Asynchronous results come back as tokens fed into the controller,
//!   never as callbacks into it

pub mod delegate;
pub mod renderer;
pub mod timer;

pub use delegate::MessageDelegate;
pub use renderer::Renderer;
pub use timer::Timer;
