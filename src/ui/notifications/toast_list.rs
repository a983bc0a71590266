// SPDX-License-Identifier: MPL-2.0
//! Overlay that stacks the toasts of a store.
//!
//! The list is a read-only projection: it pairs every notification with the
//! message that dismisses it and lays the cards out in a corner of the window.

use super::notification::{Notification, NotificationId};
use super::toast::Toast;
use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};
use serde::{Deserialize, Serialize};

/// Corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Position {
    fn horizontal(self) -> alignment::Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
            Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
        }
    }

    fn vertical(self) -> alignment::Vertical {
        match self {
            Position::TopLeft | Position::TopRight => alignment::Vertical::Top,
            Position::BottomLeft | Position::BottomRight => alignment::Vertical::Bottom,
        }
    }
}

/// A notification together with its bound dismiss message.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry<M> {
    pub notification: Notification,
    pub on_close: M,
}

/// Layout options for [`ToastList::view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOptions {
    pub position: Position,
    /// Show only the newest `n` toasts. Hidden ones stay in the store.
    pub max_visible: Option<usize>,
}

/// Toast stack renderer.
pub struct ToastList;

impl ToastList {
    /// Pairs each notification with `on_remove(id)`, keeping collection order.
    pub fn bind<M>(
        notifications: impl IntoIterator<Item = Notification>,
        on_remove: impl Fn(NotificationId) -> M,
    ) -> Vec<ToastEntry<M>> {
        notifications
            .into_iter()
            .map(|notification| {
                let on_close = on_remove(notification.id());
                ToastEntry {
                    notification,
                    on_close,
                }
            })
            .collect()
    }

    /// Applies `max_visible`, keeping the newest entries in their original order.
    #[must_use]
    pub fn visible<M>(
        mut entries: Vec<ToastEntry<M>>,
        max_visible: Option<usize>,
    ) -> Vec<ToastEntry<M>> {
        if let Some(max) = max_visible {
            let hidden = entries.len().saturating_sub(max);
            entries.drain(..hidden);
        }
        entries
    }

    /// Renders the overlay. Returns an empty, zero-sized element when there is
    /// nothing to show.
    pub fn view<'a, M>(
        notifications: impl IntoIterator<Item = Notification>,
        on_remove: impl Fn(NotificationId) -> M,
        options: ListOptions,
        close_label: &str,
    ) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        let entries = Self::visible(Self::bind(notifications, on_remove), options.max_visible);

        if entries.is_empty() {
            return Container::new(Text::new(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toasts = entries
            .into_iter()
            .map(|entry| Toast::view(&entry.notification, entry.on_close, close_label));

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(options.position.horizontal());

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(options.position.horizontal())
            .align_y(options.position.vertical())
            .padding(spacing::MD)
            .into()
    }
}
