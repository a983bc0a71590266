// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`NotificationStore`] is the only owner of the notification collection.
//! It assigns ids, keeps records in insertion order (newest last), and arms one
//! auto-dismiss timer per record on a tokio runtime. Removal is idempotent: a
//! manual dismiss cancels the record's timer, and a timer that still fires after
//! the record is gone finds nothing to remove.
//!
//! Every effective mutation bumps a revision counter published through a
//! `tokio::sync::watch` channel so views know when to re-render.

use super::notification::{Kind, Notification, NotificationId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;

/// Store-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Auto-dismiss delay applied to every kind when the caller gives none.
    /// `None` keeps the per-kind defaults.
    pub default_duration: Option<Duration>,
}

impl StoreConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = Some(duration);
        self
    }

    /// Resolves the delay for a notification of `kind` added without one.
    #[must_use]
    pub fn duration_for(&self, kind: Kind) -> Duration {
        self.default_duration
            .unwrap_or_else(|| kind.default_duration())
    }
}

/// Lifetime counters for monitoring and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Notifications added.
    pub added: u64,
    /// Notifications removed explicitly (close button, program, `clear`).
    pub dismissed: u64,
    /// Notifications removed by their auto-dismiss timer.
    pub expired: u64,
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<Notification>,
    timers: HashMap<NotificationId, AbortHandle>,
    next_id: u64,
    stats: StoreStats,
}

impl Inner {
    fn take(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.records.iter().position(|n| n.id() == id)?;
        Some(self.records.remove(pos))
    }
}

/// State reachable from timer tasks. Timers only hold a `Weak` to it.
#[derive(Debug)]
struct Shared {
    inner: Mutex<Inner>,
    revision: watch::Sender<u64>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    /// Timer callback. A no-op when the record was already dismissed.
    fn expire(&self, id: NotificationId) {
        let expired = {
            let mut inner = self.lock();
            inner.timers.remove(&id);
            let expired = inner.take(id).is_some();
            if expired {
                inner.stats.expired += 1;
            }
            expired
        };

        if expired {
            tracing::debug!(%id, "notification expired");
            self.bump();
        }
    }
}

/// Owner of the ordered notification collection and its timers.
///
/// Dropping the store cancels every pending timer.
#[derive(Debug)]
pub struct NotificationStore {
    shared: Arc<Shared>,
    runtime: Handle,
    config: StoreConfig,
}

impl NotificationStore {
    /// Creates an empty store whose timers run on `runtime`.
    #[must_use]
    pub fn new(config: StoreConfig, runtime: Handle) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner::default()),
                revision,
            }),
            runtime,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Appends a notification and schedules its removal.
    ///
    /// `kind` defaults to [`Kind::Info`]; `duration` defaults to
    /// [`StoreConfig::duration_for`]. Returns the new id so the caller may
    /// dismiss it early.
    pub fn add(
        &self,
        message: impl Into<String>,
        kind: Option<Kind>,
        duration: Option<Duration>,
    ) -> NotificationId {
        let kind = kind.unwrap_or_default();
        let duration = duration.unwrap_or_else(|| self.config.duration_for(kind));
        let message = message.into();

        let id = {
            let mut inner = self.shared.lock();
            let id = NotificationId::from_raw(inner.next_id);
            inner.next_id += 1;
            inner
                .records
                .push(Notification::new(id, kind, message, duration));
            inner.stats.added += 1;
            // Armed under the lock: the timer cannot observe the store before
            // its own handle is registered.
            let timer = self.spawn_timer(id, duration);
            inner.timers.insert(id, timer);
            id
        };

        tracing::debug!(%id, %kind, ?duration, "notification added");
        self.shared.bump();
        id
    }

    /// Removes the notification with `id` and cancels its timer.
    ///
    /// Returns `true` if it was present. Unknown or already removed ids are
    /// ignored and leave the revision untouched.
    pub fn remove(&self, id: NotificationId) -> bool {
        let removed = {
            let mut inner = self.shared.lock();
            if let Some(timer) = inner.timers.remove(&id) {
                timer.abort();
            }
            let removed = inner.take(id).is_some();
            if removed {
                inner.stats.dismissed += 1;
            }
            removed
        };

        if removed {
            tracing::debug!(%id, "notification dismissed");
            self.shared.bump();
        } else {
            tracing::trace!(%id, "dismiss ignored, notification not present");
        }
        removed
    }

    /// Dismisses every notification. Returns how many were removed.
    pub fn clear(&self) -> usize {
        let count = {
            let mut inner = self.shared.lock();
            for (_, timer) in inner.timers.drain() {
                timer.abort();
            }
            let count = inner.records.len();
            inner.records.clear();
            inner.stats.dismissed += count as u64;
            count
        };

        if count > 0 {
            tracing::debug!(count, "notifications cleared");
            self.shared.bump();
        }
        count
    }

    /// Returns a snapshot of the collection in display order (oldest first).
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.shared.lock().records.clone()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.shared
            .lock()
            .records
            .iter()
            .find(|n| n.id() == id)
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.shared.lock().records.iter().any(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.lock().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.lock().records.is_empty()
    }

    /// Number of auto-dismiss timers still armed.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.shared.lock().timers.len()
    }

    #[must_use]
    pub fn stats(&self) -> StoreStats {
        self.shared.lock().stats
    }

    /// Current revision. Increments once per effective add, remove, expiry
    /// or non-empty clear.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.shared.revision.borrow()
    }

    /// Subscribes to revision changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    /// Aborts every armed timer without touching the records.
    pub(crate) fn cancel_timers(&self) -> usize {
        let mut inner = self.shared.lock();
        let pending = inner.timers.len();
        for (_, timer) in inner.timers.drain() {
            timer.abort();
        }
        pending
    }

    fn spawn_timer(&self, id: NotificationId, duration: Duration) -> AbortHandle {
        let shared = Arc::downgrade(&self.shared);
        self.runtime
            .spawn(async move {
                tokio::time::sleep(duration).await;
                if let Some(shared) = shared.upgrade() {
                    shared.expire(id);
                }
            })
            .abort_handle()
    }
}

impl Drop for NotificationStore {
    fn drop(&mut self) {
        let pending = self.cancel_timers();
        if pending > 0 {
            tracing::debug!(pending, "notification store dropped, timers cancelled");
        }
    }
}
