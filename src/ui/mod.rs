// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.
//!
//! - [`design_tokens`] - colors, spacing and sizes
//! - [`notifications`] - toast store, provider and widgets

pub mod design_tokens;
pub mod notifications;
