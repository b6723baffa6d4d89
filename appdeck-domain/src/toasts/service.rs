//! Toast notification service.
//!
//! Implements the replace-not-stack policy: showing a toast dismisses every
//! toast currently visible. Expiry is a scheduled task per toast, aborted on
//! early dismissal; dismissal itself is idempotent so a late-firing timer is
//! a no-op.

use crate::toasts::types::{DismissReason, Toast, ToastEvent, ToastSeverity, LEAVE_WINDOW};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

/// Interface for showing and dismissing toast notifications.
#[async_trait]
pub trait ToastService: Send + Sync {
    /// Shows a toast, replacing all currently visible toasts.
    async fn show(&self, message: &str, severity: ToastSeverity) -> Toast;

    /// Dismisses one toast. Unknown or already dismissed ids are ignored.
    async fn dismiss(&self, id: Uuid, reason: DismissReason);

    /// Dismisses every visible toast.
    async fn dismiss_all(&self, reason: DismissReason);

    /// Returns the currently visible toasts (excluding toasts that are
    /// animating out).
    async fn visible(&self) -> Vec<Toast>;
}

/// Display lifecycle of a toast entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visible,
    Leaving,
}

struct ToastEntry {
    toast: Toast,
    phase: Phase,
    /// Scheduled expiry; aborted when the toast is dismissed early.
    expiry: Option<JoinHandle<()>>,
}

struct Inner {
    board: RwLock<Vec<ToastEntry>>,
    event_publisher: Option<Box<dyn Fn(ToastEvent) + Send + Sync>>,
}

impl Inner {
    fn publish(&self, event: ToastEvent) {
        if let Some(publisher) = &self.event_publisher {
            publisher(event);
        }
    }

    /// Moves a visible entry into the leaving phase under an already-held
    /// write lock and schedules its final removal. Returns the retired
    /// toast's id.
    fn retire_entry(inner: &Arc<Inner>, entry: &mut ToastEntry) -> Uuid {
        entry.phase = Phase::Leaving;
        if let Some(handle) = entry.expiry.take() {
            handle.abort();
        }
        let id = entry.toast.id;
        let inner = Arc::clone(inner);
        tokio::spawn(async move {
            tokio::time::sleep(LEAVE_WINDOW).await;
            let mut board = inner.board.write().await;
            board.retain(|e| e.toast.id != id);
        });
        id
    }

    async fn dismiss(inner: &Arc<Inner>, id: Uuid, reason: DismissReason) {
        let retired = {
            let mut board = inner.board.write().await;
            match board
                .iter_mut()
                .find(|e| e.toast.id == id && e.phase == Phase::Visible)
            {
                Some(entry) => Some(Self::retire_entry(inner, entry)),
                // Already leaving or long gone: dismissing twice is a no-op.
                None => None,
            }
        };
        if let Some(id) = retired {
            debug!(%id, ?reason, "Toast dismissed");
            inner.publish(ToastEvent::Dismissed { id, reason });
        }
    }

    async fn dismiss_all(inner: &Arc<Inner>, reason: DismissReason) {
        let retired: Vec<Uuid> = {
            let mut board = inner.board.write().await;
            board
                .iter_mut()
                .filter(|e| e.phase == Phase::Visible)
                .map(|entry| Self::retire_entry(inner, entry))
                .collect()
        };
        for id in retired {
            debug!(%id, ?reason, "Toast dismissed");
            inner.publish(ToastEvent::Dismissed { id, reason });
        }
    }
}

/// Default implementation of [`ToastService`].
pub struct DefaultToastService {
    inner: Arc<Inner>,
}

impl DefaultToastService {
    /// Creates a toast service without an event subscriber.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                board: RwLock::new(Vec::new()),
                event_publisher: None,
            }),
        }
    }

    /// Creates a toast service that forwards lifecycle events to `publisher`.
    pub fn with_event_publisher<F>(publisher: F) -> Self
    where
        F: Fn(ToastEvent) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                board: RwLock::new(Vec::new()),
                event_publisher: Some(Box::new(publisher)),
            }),
        }
    }

    #[cfg(test)]
    async fn board_len(&self) -> usize {
        self.inner.board.read().await.len()
    }
}

impl Default for DefaultToastService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToastService for DefaultToastService {
    async fn show(&self, message: &str, severity: ToastSeverity) -> Toast {
        let toast = Toast::new(message, severity);
        let replaced: Vec<Uuid> = {
            let mut board = self.inner.board.write().await;
            // Replace-not-stack: everything visible goes first.
            let replaced: Vec<Uuid> = board
                .iter_mut()
                .filter(|e| e.phase == Phase::Visible)
                .map(|entry| Inner::retire_entry(&self.inner, entry))
                .collect();

            let id = toast.id;
            let inner = Arc::clone(&self.inner);
            let expiry = tokio::spawn(async move {
                tokio::time::sleep(severity.display_duration()).await;
                Inner::dismiss(&inner, id, DismissReason::Expired).await;
            });
            board.push(ToastEntry {
                toast: toast.clone(),
                phase: Phase::Visible,
                expiry: Some(expiry),
            });
            replaced
        };

        for id in replaced {
            self.inner
                .publish(ToastEvent::Dismissed { id, reason: DismissReason::Replaced });
        }
        debug!(id = %toast.id, ?severity, text = message, "Toast shown");
        self.inner.publish(ToastEvent::Shown(toast.clone()));
        toast
    }

    async fn dismiss(&self, id: Uuid, reason: DismissReason) {
        Inner::dismiss(&self.inner, id, reason).await;
    }

    async fn dismiss_all(&self, reason: DismissReason) {
        Inner::dismiss_all(&self.inner, reason).await;
    }

    async fn visible(&self) -> Vec<Toast> {
        self.inner
            .board
            .read()
            .await
            .iter()
            .filter(|e| e.phase == Phase::Visible)
            .map(|e| e.toast.clone())
            .collect()
    }
}
