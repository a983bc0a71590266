// SPDX-License-Identifier: MPL-2.0
use iced_notify::ui::notifications::{
    use_notification, Kind, NotificationId, NotificationProvider, Scope, StoreConfig, ToastList,
};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum Message {
    Dismiss(NotificationId),
}

/// Routes a message the way an application's update function would.
fn dispatch(scope: &Scope<'_>, message: Message) {
    match message {
        Message::Dismiss(id) => {
            use_notification(scope).remove_notification(id);
        }
    }
}

#[tokio::test]
async fn saved_toast_is_closed_by_its_close_button() {
    let provider = NotificationProvider::new(StoreConfig::default()).expect("runtime available");
    let scope = provider.scope();

    use_notification(&scope).add_notification("Saved", None, None);

    let entries = ToastList::bind(use_notification(&scope).notifications(), Message::Dismiss);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].notification.message(), "Saved");
    assert_eq!(entries[0].notification.kind(), Kind::Info);

    dispatch(&scope, entries[0].on_close.clone());

    assert!(ToastList::bind(use_notification(&scope).notifications(), Message::Dismiss).is_empty());
    assert_eq!(provider.store().len(), 0);
}

#[tokio::test]
async fn removing_the_first_of_two_leaves_the_second() {
    let provider = NotificationProvider::new(StoreConfig::default()).expect("runtime available");
    let scope = provider.scope();
    let notifications = use_notification(&scope);

    let first = notifications.add_notification("First", None, None);
    notifications.add_notification("Second", None, None);

    let texts: Vec<_> = notifications
        .notifications()
        .into_iter()
        .map(|n| n.message().to_string())
        .collect();
    assert_eq!(texts, ["First", "Second"]);

    notifications.remove_notification(first);

    let texts: Vec<_> = notifications
        .notifications()
        .into_iter()
        .map(|n| n.message().to_string())
        .collect();
    assert_eq!(texts, ["Second"]);
}

#[tokio::test(start_paused = true)]
async fn close_click_racing_the_timer_removes_once() {
    let provider = NotificationProvider::new(StoreConfig::default()).expect("runtime available");
    let scope = provider.scope();
    let id = use_notification(&scope).add_notification(
        "Uploading",
        Some(Kind::Warning),
        Some(Duration::from_millis(500)),
    );
    let entries = ToastList::bind(use_notification(&scope).notifications(), Message::Dismiss);

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(!provider.store().contains(id));
    let revision = provider.store().revision();

    // The user clicks the stale toast after the timer already removed it.
    dispatch(&scope, entries[0].on_close.clone());

    assert_eq!(provider.store().revision(), revision);
    let stats = provider.store().stats();
    assert_eq!((stats.expired, stats.dismissed), (1, 0));
}

#[tokio::test(start_paused = true)]
async fn mixed_lifetimes_drain_in_order() {
    let provider = NotificationProvider::new(StoreConfig::default()).expect("runtime available");
    let notifications = use_notification(&provider.scope());
    let mut rx = notifications.subscribe();

    notifications.add_notification("slow", None, Some(Duration::from_secs(3)));
    notifications.add_notification("fast", None, Some(Duration::from_secs(1)));
    notifications.add_notification("medium", None, Some(Duration::from_secs(2)));
    rx.borrow_and_update();

    rx.changed().await.expect("store alive");
    let texts: Vec<_> = notifications
        .notifications()
        .into_iter()
        .map(|n| n.message().to_string())
        .collect();
    assert_eq!(texts, ["slow", "medium"]);

    rx.changed().await.expect("store alive");
    rx.changed().await.expect("store alive");
    assert!(notifications.notifications().is_empty());
}

#[test]
#[should_panic(expected = "must be used within a NotificationProvider")]
fn accessor_without_provider_fails_fast() {
    let scope = Scope::detached();
    let _ = use_notification(&scope).add_notification("Test", None, None);
}
