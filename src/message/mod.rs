// SPDX-License-Identifier: MPL-2.0
//! Message records and their value types.
//!
//! # Components
//!
//! - [`Message`] / [`MessageBuilder`] - the record moved through the presenter
//! - [`DisplayDuration`] / [`DurationPolicy`] - symbolic durations and their resolution
//! - [`MessageKind`], [`Position`], [`HostId`], [`ImageHandle`] - configuration values

mod duration;
mod record;
mod types;

pub use duration::{DisplayDuration, DurationPolicy};
pub use record::{Hook, Message, MessageBuilder, MessageCallback};
pub use types::{HostId, ImageHandle, MessageId, MessageKind, Position};
