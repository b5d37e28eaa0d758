//! Transient feedback banners with a single shared slot

use std::{
    sync::{
        Arc, Mutex, MutexGuard, Weak,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use time::OffsetDateTime;
use tokio::task::JoinHandle;

use crate::{Kind, Notification, NotificationId, NotificationSurface};

pub const DEFAULT_DISPLAY: Duration = Duration::from_millis(5000);

struct Active {
    notification: Notification,
    timer: Option<JoinHandle<()>>,
}

struct Inner<S> {
    surface: S,
    slot: Mutex<Option<Active>>,
    next_id: AtomicU64,
    display: Duration,
}

impl<S: NotificationSurface> Inner<S> {
    fn slot(&self) -> MutexGuard<'_, Option<Active>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn dismiss(&self, id: NotificationId) -> bool {
        let mut slot = self.slot();
        if slot.as_ref().map(|a| a.notification.id) != Some(id) {
            return false;
        }

        if let Some(active) = slot.take() {
            if let Some(timer) = active.timer {
                timer.abort();
            }
            self.surface.remove(id);
        }

        true
    }
}

/// Shows at most one notification at a time.
///
/// Cloning is cheap and every clone drives the same slot, so the presenter is
/// built once at startup and handed to whoever needs to give feedback.
pub struct NotificationPresenter<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for NotificationPresenter<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: NotificationSurface> NotificationPresenter<S> {
    pub fn new(surface: S) -> Self {
        Self::with_display(surface, DEFAULT_DISPLAY)
    }

    pub fn with_display(surface: S, display: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                surface,
                slot: Mutex::new(None),
                next_id: AtomicU64::new(1),
                display,
            }),
        }
    }

    pub fn surface(&self) -> &S {
        &self.inner.surface
    }

    pub fn display(&self) -> Duration {
        self.inner.display
    }

    /// Replaces the visible notification with a new one.
    ///
    /// The banner removes itself once the display window elapses. Outside a
    /// tokio runtime there is no timer and the banner stays until dismissed.
    pub fn show(&self, message: impl Into<String>, kind: Kind) -> NotificationId {
        let notification = Notification {
            id: self.inner.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            kind,
            created_at: OffsetDateTime::now_utc(),
        };
        let id = notification.id;

        let mut slot = self.inner.slot();
        if let Some(previous) = slot.take() {
            if let Some(timer) = previous.timer {
                timer.abort();
            }
            self.inner.surface.remove(previous.notification.id);
        }

        tracing::debug!(id, kind = %kind, "Showing notification");
        self.inner.surface.render(&notification);

        let timer = match tokio::runtime::Handle::try_current() {
            Ok(handle) => Some(handle.spawn(auto_dismiss(
                Arc::downgrade(&self.inner),
                id,
                self.inner.display,
            ))),
            Err(_) => {
                tracing::warn!(id, "No async runtime, notification will not auto-dismiss");
                None
            }
        };

        *slot = Some(Active {
            notification,
            timer,
        });

        id
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Kind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Kind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Kind::Error)
    }

    /// Close action of the banner. Returns false when `id` is no longer the
    /// visible notification.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.inner.dismiss(id)
    }

    pub fn visible(&self) -> Option<Notification> {
        self.inner.slot().as_ref().map(|a| a.notification.clone())
    }
}

async fn auto_dismiss<S: NotificationSurface>(
    inner: Weak<Inner<S>>,
    id: NotificationId,
    display: Duration,
) {
    tokio::time::sleep(display).await;

    // The presenter may be gone with the page.
    let Some(inner) = inner.upgrade() else {
        return;
    };

    // The timer is this task, so the slot is cleared here instead of `dismiss`.
    let mut slot = inner.slot();
    if slot.as_ref().map(|a| a.notification.id) == Some(id) {
        slot.take();
        inner.surface.remove(id);
        tracing::debug!(id, "Notification expired");
    }
}
