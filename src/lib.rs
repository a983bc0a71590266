// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` provides toast notifications for Iced applications.
//!
//! A [`NotificationProvider`](ui::notifications::NotificationProvider) owns a
//! store of transient messages that dismiss themselves after a delay. Views
//! reach it through a [`Scope`](ui::notifications::Scope) and render it with
//! [`ToastList`](ui::notifications::ToastList). The crate also ships a small
//! demo window (`app`) with Fluent translations and a `settings.toml` file.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
