// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (save
//! success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `NotificationId`, `Kind`
//! - [`store`] - `NotificationStore`: ordered collection and auto-dismiss timers
//! - [`provider`] - `NotificationProvider`, `Scope` and the `use_notification` accessor
//! - [`toast`] - widget rendering one notification
//! - [`toast_list`] - overlay stacking every notification of a store
//!
//! # Usage
//!
//! ```ignore
//! let provider = NotificationProvider::new(StoreConfig::default())?;
//!
//! // Anywhere below the provider
//! let notifications = use_notification(&provider.scope());
//! notifications.add_notification("Image saved", Some(Kind::Success), None);
//!
//! // In your view function
//! let overlay = ToastList::view(
//!     notifications.notifications(),
//!     Message::DismissNotification,
//!     ListOptions::default(),
//!     &i18n.tr("notification-close"),
//! );
//! ```
//!
//! New notifications are appended: the stack shows the oldest first and the
//! newest closest to the anchor corner when anchored at the bottom.

pub mod notification;
pub mod provider;
pub mod store;
pub mod toast;
pub mod toast_list;

pub use notification::{Kind, Notification, NotificationId};
pub use provider::{
    try_use_notification, use_notification, NotificationContext, NotificationProvider, Scope,
};
pub use store::{NotificationStore, StoreConfig, StoreStats};
pub use toast::Toast;
pub use toast_list::{ListOptions, Position, ToastEntry, ToastList};
