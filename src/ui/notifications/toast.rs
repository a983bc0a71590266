// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with kind-colored accents and a dismiss button. A toast owns no
//! state: the store decides when it goes away.

use super::notification::Notification;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, tooltip, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Glyph drawn on the dismiss button.
const CLOSE_GLYPH: &str = "✕";

/// Toast widget.
pub struct Toast;

impl Toast {
    /// Renders a single toast. Pressing the dismiss button emits `on_close`.
    ///
    /// The returned element owns its text, so it does not borrow `notification`.
    pub fn view<'a, M>(
        notification: &Notification,
        on_close: M,
        close_label: &str,
    ) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        let kind = notification.kind();
        let accent_color = kind.color();

        let icon_widget = Text::new(kind.icon())
            .size(sizing::ICON_SM)
            .color(accent_color);

        let message_widget = Text::new(notification.message().to_owned())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(Text::new(CLOSE_GLYPH).size(typography::CAPTION))
            .on_press(on_close)
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let dismiss = tooltip(
            dismiss_button,
            Container::new(Text::new(close_label.to_owned()).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(container::rounded_box),
            tooltip::Position::Left,
        );

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
