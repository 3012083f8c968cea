// SPDX-License-Identifier: MPL-2.0
//! Value types attached to a message.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Unique identifier for a message.
///
/// Also serves as the renderer-side identity of the message's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl MessageId {
    /// Creates a new unique message ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Message type; selects the design entry used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Default,
    Success,
    Warning,
    Error,
}

impl MessageKind {
    /// All kinds, in declaration order.
    pub const ALL: [MessageKind; 4] = [
        MessageKind::Default,
        MessageKind::Success,
        MessageKind::Warning,
        MessageKind::Error,
    ];

    /// Key of this kind inside a design file.
    #[must_use]
    pub fn design_key(self) -> &'static str {
        match self {
            MessageKind::Default => "default",
            MessageKind::Success => "success",
            MessageKind::Warning => "warning",
            MessageKind::Error => "error",
        }
    }

    /// Parses a design file key.
    #[must_use]
    pub fn from_design_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.design_key() == key)
    }
}

/// Screen edge the message slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

/// Opaque handle to the view hierarchy a message is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(pub u64);

/// Opaque image reference passed through to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(Arc<str>);

impl ImageHandle {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_ids_are_unique() {
        assert_ne!(MessageId::new(), MessageId::new());
    }

    #[test]
    fn message_ids_increase() {
        let first = MessageId::new();
        let second = MessageId::new();
        assert!(second > first);
    }

    #[test]
    fn design_keys_round_trip() {
        for kind in MessageKind::ALL {
            assert_eq!(MessageKind::from_design_key(kind.design_key()), Some(kind));
        }
        assert_eq!(MessageKind::from_design_key("info"), None);
    }
}
