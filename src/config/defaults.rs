// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Automatic duration resolution
//! - **Diagnostics**: Lifecycle history capacity

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Time an automatic message stays on screen before its text is considered,
/// including the entrance animation (in seconds).
pub const DEFAULT_AUTOMATIC_BASE_SECS: f64 = 1.8;

/// Extra display time granted per subtitle character (in seconds).
pub const DEFAULT_PER_CHARACTER_SECS: f64 = 0.04;

/// Floor applied to every automatic duration (in seconds).
pub const DEFAULT_MINIMUM_SECS: f64 = 2.0;

/// Largest accepted value for any timing setting (in seconds).
pub const MAX_TIMING_SECS: f64 = 600.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in the controller history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Minimum history capacity.
pub const MIN_HISTORY_CAPACITY: usize = 16;

/// Maximum history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_AUTOMATIC_BASE_SECS > 0.0);
    assert!(DEFAULT_PER_CHARACTER_SECS >= 0.0);
    assert!(DEFAULT_MINIMUM_SECS > 0.0);
    assert!(DEFAULT_MINIMUM_SECS <= MAX_TIMING_SECS);

    assert!(MIN_HISTORY_CAPACITY > 0);
    assert!(MAX_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn automatic_base_is_at_least_the_floor_minus_one_second() {
        assert!(DEFAULT_AUTOMATIC_BASE_SECS + 1.0 > DEFAULT_MINIMUM_SECS);
    }

    #[test]
    fn history_defaults_are_valid() {
        assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
        assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);
    }
}
