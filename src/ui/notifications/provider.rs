// SPDX-License-Identifier: MPL-2.0
//! Scoped access to a notification store.
//!
//! A [`NotificationProvider`] owns one [`NotificationStore`] for the part of the
//! UI it wraps. Views receive a [`Scope`] from their parent and look the store
//! up with [`use_notification`]. Looking it up in a scope that no provider
//! wraps is a programming error and panics immediately.
//!
//! ```no_run
//! use iced_notify::ui::notifications::{use_notification, Kind, NotificationProvider, StoreConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> iced_notify::error::Result<()> {
//! let provider = NotificationProvider::new(StoreConfig::default())?;
//! let scope = provider.scope();
//!
//! let notifications = use_notification(&scope);
//! let id = notifications.add_notification("Saved", Some(Kind::Success), None);
//! notifications.remove_notification(id);
//! # Ok(())
//! # }
//! ```

use super::notification::{Kind, Notification, NotificationId};
use super::store::{NotificationStore, StoreConfig};
use crate::error::{Error, Result};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;

const ACCESSOR: &str = "use_notification";

/// Establishes a notification store for a subtree.
///
/// The store lives exactly as long as the provider; dropping the provider
/// cancels every pending auto-dismiss timer.
#[derive(Debug)]
pub struct NotificationProvider {
    store: NotificationStore,
}

impl NotificationProvider {
    /// Mounts a provider on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRuntime`] when called outside a tokio runtime.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        Ok(Self::with_runtime(config, runtime))
    }

    /// Mounts a provider whose timers run on `runtime`.
    #[must_use]
    pub fn with_runtime(config: StoreConfig, runtime: Handle) -> Self {
        tracing::debug!(?config, "notification provider mounted");
        Self {
            store: NotificationStore::new(config, runtime),
        }
    }

    /// Returns the scope handed to the views this provider wraps.
    #[must_use]
    pub fn scope(&self) -> Scope<'_> {
        Scope {
            store: Some(&self.store),
        }
    }

    #[must_use]
    pub fn store(&self) -> &NotificationStore {
        &self.store
    }
}

/// Context value passed down the view tree.
///
/// Copy it into child views; it only borrows the provider's store.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scope<'a> {
    store: Option<&'a NotificationStore>,
}

impl Scope<'static> {
    /// A scope outside any provider.
    #[must_use]
    pub fn detached() -> Self {
        Self { store: None }
    }
}

impl Scope<'_> {
    #[must_use]
    pub fn has_provider(&self) -> bool {
        self.store.is_some()
    }
}

/// Operations a view may perform on the nearest store.
#[derive(Debug, Clone, Copy)]
pub struct NotificationContext<'a> {
    store: &'a NotificationStore,
}

impl<'a> NotificationContext<'a> {
    /// Shows `message` and schedules its removal. See [`NotificationStore::add`].
    pub fn add_notification(
        &self,
        message: impl Into<String>,
        kind: Option<Kind>,
        duration: Option<Duration>,
    ) -> NotificationId {
        self.store.add(message, kind, duration)
    }

    /// Dismisses `id`. Returns `false` when it was already gone.
    pub fn remove_notification(&self, id: NotificationId) -> bool {
        self.store.remove(id)
    }

    /// Snapshot of the active notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.store.notifications()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    #[must_use]
    pub fn store(&self) -> &'a NotificationStore {
        self.store
    }
}

/// Looks up the notification store of the enclosing provider.
///
/// # Panics
///
/// Panics with "use_notification must be used within a NotificationProvider"
/// when `scope` is not wrapped by a provider.
#[must_use]
pub fn use_notification<'a>(scope: &Scope<'a>) -> NotificationContext<'a> {
    match try_use_notification(scope) {
        Ok(context) => context,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible variant of [`use_notification`].
///
/// # Errors
///
/// Returns [`Error::MissingProvider`] when `scope` is not wrapped by a provider.
pub fn try_use_notification<'a>(scope: &Scope<'a>) -> Result<NotificationContext<'a>> {
    scope
        .store
        .map(|store| NotificationContext { store })
        .ok_or(Error::MissingProvider { accessor: ACCESSOR })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn provider_scope_resolves_its_store() {
        let provider = NotificationProvider::new(StoreConfig::default()).unwrap();
        let scope = provider.scope();
        assert!(scope.has_provider());

        let context = use_notification(&scope);
        let id = context.add_notification("Test", None, None);
        assert_eq!(provider.store().len(), 1);
        assert!(context.remove_notification(id));
        assert!(provider.store().is_empty());
    }

    #[tokio::test]
    async fn child_scopes_share_the_same_store() {
        let provider = NotificationProvider::new(StoreConfig::default()).unwrap();
        let parent = provider.scope();
        let child = parent;

        use_notification(&parent).add_notification("from parent", None, None);
        use_notification(&child).add_notification("from child", None, None);

        let messages: Vec<_> = use_notification(&child)
            .notifications()
            .into_iter()
            .map(|n| n.message().to_string())
            .collect();
        assert_eq!(messages, ["from parent", "from child"]);
    }

    #[test]
    #[should_panic(expected = "use_notification must be used within a NotificationProvider")]
    fn accessor_outside_provider_panics() {
        let _ = use_notification(&Scope::detached());
    }

    #[test]
    fn fallible_accessor_reports_missing_provider() {
        let err = try_use_notification(&Scope::default()).unwrap_err();
        assert_eq!(
            err,
            Error::MissingProvider {
                accessor: "use_notification"
            }
        );
    }

    #[test]
    fn provider_requires_a_runtime() {
        let err = NotificationProvider::new(StoreConfig::default()).unwrap_err();
        assert_eq!(err, Error::NoRuntime);
    }

    #[test]
    fn provider_accepts_an_explicit_runtime() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let provider =
            NotificationProvider::with_runtime(StoreConfig::default(), runtime.handle().clone());
        let id = use_notification(&provider.scope()).add_notification("queued", None, None);
        assert!(provider.store().contains(id));
        drop(provider);
    }

    #[tokio::test(start_paused = true)]
    async fn unmounting_the_provider_cancels_pending_timers() {
        let provider = NotificationProvider::new(StoreConfig::default()).unwrap();
        let context = use_notification(&provider.scope());
        context.add_notification("a", None, Some(Duration::from_millis(50)));
        context.add_notification("b", None, Some(Duration::from_millis(80)));
        assert_eq!(provider.store().pending_timers(), 2);
        let rx = context.subscribe();

        drop(provider);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(rx.has_changed().is_err());
    }
}
