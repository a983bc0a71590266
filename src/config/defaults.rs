// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used by the settings file and the notification store.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Shortest auto-dismiss delay accepted from the settings file (in ms).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Longest auto-dismiss delay accepted from the settings file (in ms).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

/// Upper bound for `max_visible`.
pub const MAX_VISIBLE_LIMIT: usize = 20;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS > 0);
    assert!(MAX_NOTIFICATION_DURATION_MS > MIN_NOTIFICATION_DURATION_MS);
    assert!(MAX_VISIBLE_LIMIT > 0);
};
