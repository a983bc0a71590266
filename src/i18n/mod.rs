// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Labels of the toast widgets and the demo window come from Fluent bundles
//! embedded at build time.
//!
//! # Features
//!
//! - Locale selection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Fallback to `en-US` when no supported locale is found

pub mod fluent;
