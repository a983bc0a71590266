// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the notification provider into an Iced window.
//!
//! The `App` owns the provider for its whole lifetime, hands the provider's
//! scope to child views, and routes toast dismiss clicks back to the store.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{
    use_notification, Kind, Notification, NotificationProvider, Scope, ToastList,
};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, time, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Interval of the re-render tick while toasts are visible.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    provider: NotificationProvider,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("notifications", &self.provider.store().len())
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load(flags.config_dir.as_deref()).unwrap_or_else(|err| {
            tracing::warn!(%err, "could not read settings, using defaults");
            Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);
        let provider =
            NotificationProvider::with_runtime(config.notifications.store_config(), flags.runtime);

        (
            Self {
                i18n,
                config,
                provider,
            },
            Task::none(),
        )
    }

    /// Scope handed to every view below the application root.
    #[must_use]
    pub fn scope(&self) -> Scope<'_> {
        self.provider.scope()
    }

    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        use_notification(&self.scope()).notifications()
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.provider.store().is_empty() {
            Subscription::none()
        } else {
            time::every(TICK_INTERVAL).map(Message::Tick)
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let scope = self.provider.scope();
        let notifications = use_notification(&scope);

        match message {
            Message::Add(kind) => {
                let text = self.i18n.tr(&format!("demo-message-{kind}"));
                notifications.add_notification(text, Some(kind), None);
            }
            Message::DismissNotification(id) => {
                notifications.remove_notification(id);
            }
            Message::ClearNotifications => {
                notifications.store().clear();
            }
            Message::Tick(_) => {}
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let scope = self.scope();
        let notifications = use_notification(&scope);

        let overlay = ToastList::view(
            notifications.notifications(),
            Message::DismissNotification,
            self.config.notifications.list_options(),
            &self.i18n.tr("notification-close"),
        );

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self.controls(scope))
            .push(overlay)
            .into()
    }

    fn controls(&self, scope: Scope<'_>) -> Element<'_, Message> {
        let active = use_notification(&scope).store().len();

        let add_buttons = Kind::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, &kind| {
                row.push(
                    button(Text::new(self.i18n.tr(&format!("demo-add-{kind}"))))
                        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                        .on_press(Message::Add(kind)),
                )
            },
        );

        let clear_button = button(Text::new(self.i18n.tr("demo-clear")))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press_maybe((active > 0).then_some(Message::ClearNotifications));

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(self.i18n.tr("demo-heading")).size(typography::TITLE_MD))
            .push(add_buttons)
            .push(clear_button)
            .push(
                Text::new(self.i18n.tr_with_count("demo-active-count", active))
                    .size(typography::BODY),
            );

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio::runtime::Handle;

    fn app() -> App {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.path().to_path_buf()),
            runtime: Handle::current(),
        };
        App::new(flags).0
    }

    #[tokio::test]
    async fn new_app_starts_without_notifications() {
        let app = app();
        assert!(app.notifications().is_empty());
        assert!(app.scope().has_provider());
    }

    #[tokio::test]
    async fn add_message_shows_a_translated_toast() {
        let mut app = app();
        let _ = app.update(Message::Add(Kind::Success));

        let notifications = app.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind(), Kind::Success);
        assert_eq!(notifications[0].message(), "Changes saved.");
    }

    #[tokio::test]
    async fn dismiss_message_removes_the_toast() {
        let mut app = app();
        let _ = app.update(Message::Add(Kind::Info));
        let _ = app.update(Message::Add(Kind::Error));
        let first = app.notifications()[0].id();

        let _ = app.update(Message::DismissNotification(first));
        let _ = app.update(Message::DismissNotification(first));

        let remaining = app.notifications();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind(), Kind::Error);
    }

    #[tokio::test]
    async fn clear_message_dismisses_everything() {
        let mut app = app();
        for kind in Kind::ALL {
            let _ = app.update(Message::Add(kind));
        }
        let _ = app.update(Message::ClearNotifications);
        assert!(app.notifications().is_empty());
    }

    #[tokio::test]
    async fn view_renders_with_and_without_toasts() {
        let mut app = app();
        let _ = app.view();
        let _ = app.update(Message::Add(Kind::Warning));
        let _ = app.view();
        assert_eq!(app.title(), "Notifications");
    }

    #[tokio::test(start_paused = true)]
    async fn toasts_expire_after_their_kind_duration() {
        let mut app = app();
        let _ = app.update(Message::Add(Kind::Info));
        let _ = app.update(Message::Add(Kind::Warning));

        tokio::time::sleep(Kind::Info.default_duration() + Duration::from_millis(1)).await;
        let remaining = app.notifications();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind(), Kind::Warning);

        let _ = app.update(Message::Tick(std::time::Instant::now()));
        tokio::time::sleep(Kind::Warning.default_duration()).await;
        assert!(app.notifications().is_empty());
    }
}
