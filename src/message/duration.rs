// SPDX-License-Identifier: MPL-2.0
//! Display duration and its resolution into a concrete timeout.

use crate::config::{DEFAULT_AUTOMATIC_BASE_SECS, DEFAULT_MINIMUM_SECS, DEFAULT_PER_CHARACTER_SECS};
use std::time::Duration;

/// How long a transient message stays on screen once fully displayed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DisplayDuration {
    /// Derived from the subtitle length when the entrance completes.
    #[default]
    Automatic,
    /// Stays until dismissed explicitly. No timer is armed.
    Endless,
    /// Fixed timeout.
    Explicit(Duration),
}

impl DisplayDuration {
    /// Explicit duration from fractional seconds.
    ///
    /// Negative or non-finite values yield [`DisplayDuration::Automatic`].
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        Duration::try_from_secs_f64(secs).map_or(Self::Automatic, Self::Explicit)
    }

    #[must_use]
    pub fn is_endless(self) -> bool {
        matches!(self, Self::Endless)
    }
}

/// Turns a [`DisplayDuration`] into an optional timeout.
///
/// Automatic durations resolve to `base + per_character * chars`, floored at
/// `minimum`, which keeps the result non-decreasing in subtitle length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationPolicy {
    base: Duration,
    per_character: Duration,
    minimum: Duration,
}

impl DurationPolicy {
    #[must_use]
    pub fn new(base: Duration, per_character: Duration, minimum: Duration) -> Self {
        Self {
            base,
            per_character,
            minimum,
        }
    }

    /// Resolves `duration` for a message whose subtitle is `subtitle`.
    ///
    /// Returns `None` for endless messages.
    #[must_use]
    pub fn resolve(&self, duration: DisplayDuration, subtitle: Option<&str>) -> Option<Duration> {
        match duration {
            DisplayDuration::Endless => None,
            DisplayDuration::Explicit(d) => Some(d),
            DisplayDuration::Automatic => Some(self.automatic(subtitle)),
        }
    }

    fn automatic(&self, subtitle: Option<&str>) -> Duration {
        let chars = subtitle.map_or(0, |s| s.chars().count());
        let chars = u32::try_from(chars).unwrap_or(u32::MAX);
        let extra = self.per_character.saturating_mul(chars);
        self.base.saturating_add(extra).max(self.minimum)
    }

    #[must_use]
    pub fn minimum(&self) -> Duration {
        self.minimum
    }
}

impl Default for DurationPolicy {
    fn default() -> Self {
        Self::new(
            Duration::from_secs_f64(DEFAULT_AUTOMATIC_BASE_SECS),
            Duration::from_secs_f64(DEFAULT_PER_CHARACTER_SECS),
            Duration::from_secs_f64(DEFAULT_MINIMUM_SECS),
        )
    }
}
