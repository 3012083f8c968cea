// SPDX-License-Identifier: MPL-2.0
//! Presentation queue and lifecycle state machine.
//!
//! # Components
//!
//! - [`controller`] - `MessageController`, the single-current-message state machine
//! - [`queue`] - `PresentationQueue`, the FIFO backlog
//! - [`permanent`] - `PermanentMessageSet`, messages living outside the queue
//! - [`token`] - `Completion` and `TimerToken`, the one-shot resumption tokens
//!
//! # Usage
//!
//! ```
//! use toast_queue::message::MessageKind;
//! use toast_queue::presentation::{MessageController, State};
//! use toast_queue::testing::{ManualTimer, RecordingRenderer};
//!
//! let mut controller = MessageController::new(RecordingRenderer::new(), ManualTimer::new());
//! let id = controller.display_message("Saved", Some("All changes written"), MessageKind::Success);
//! assert_eq!(controller.state(), State::Displaying);
//!
//! // The renderer hands the completion back when the entrance animation ends.
//! let done = controller.renderer_mut().take_entrance(id).unwrap();
//! controller.complete(done);
//! assert_eq!(controller.state(), State::Shown);
//! ```

pub mod controller;
pub mod permanent;
pub mod queue;
pub mod token;

pub use controller::{MessageController, Phase, State};
pub use permanent::{PermanentMessageSet, PermanentPhase};
pub use queue::PresentationQueue;
pub use token::{Completion, Generation, TimerToken, Transition};
