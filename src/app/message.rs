// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{Kind, NotificationId};
use std::path::PathBuf;
use std::time::Instant;
use tokio::runtime::Handle;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Show a sample notification of the given kind.
    Add(Kind),
    /// A toast's dismiss button was pressed.
    DismissNotification(NotificationId),
    ClearNotifications,
    Tick(Instant), // Periodic tick while toasts are on screen
}

/// Runtime flags passed from `main`.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override from the CLI (`--lang`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<PathBuf>,
    /// Runtime that drives auto-dismiss timers.
    pub runtime: Handle,
}
