// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, its store-assigned
//! `NotificationId`, and the `Kind` used to pick the toast accent and icon.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Ids are handed out by the owning store from a monotonic counter, so a store
/// never reuses one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category of a notification. Only affects presentation and the default
/// auto-dismiss delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Neutral message (blue, 3s duration).
    #[default]
    Info,
    /// Operation completed successfully (green, 3s duration).
    Success,
    /// Something the user should look at (orange, 5s duration).
    Warning,
    /// Failure (red, 8s duration).
    Error,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Info, Kind::Success, Kind::Warning, Kind::Error];

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Info => palette::INFO_500,
            Kind::Success => palette::SUCCESS_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph shown in front of the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Kind::Info => "ℹ",
            Kind::Success => "✔",
            Kind::Warning => "⚠",
            Kind::Error => "✖",
        }
    }

    /// Returns the auto-dismiss delay used when neither the caller nor the
    /// store configuration provides one.
    #[must_use]
    pub fn default_duration(self) -> Duration {
        match self {
            Kind::Info | Kind::Success => Duration::from_secs(3),
            Kind::Warning => Duration::from_secs(5),
            Kind::Error => Duration::from_secs(8),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Info => "info",
            Kind::Success => "success",
            Kind::Warning => "warning",
            Kind::Error => "error",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Kind::Info),
            "success" => Ok(Kind::Success),
            "warning" => Ok(Kind::Warning),
            "error" => Ok(Kind::Error),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// A notification currently held by a store.
///
/// Records are created by the store's add operation only; everything outside
/// the store sees clones.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    /// Delay after which the store removes this record on its own.
    duration: Duration,
    created_at: Instant,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        kind: Kind,
        message: String,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            kind,
            message,
            duration,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the auto-dismiss delay that was scheduled for this record.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
