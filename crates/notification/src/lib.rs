//! # Notification
//!
//! Transient user-facing notices. A notice is a message plus a
//! severity; showing one replaces whatever was visible, and a one-shot
//! timer clears it after a fixed delay. The timer for a superseded
//! notice is aborted so a stale clear can never wipe a newer message.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How long a notice stays visible.
pub const CLEAR_AFTER: Duration = Duration::from_secs(1);

/// Severity of a notice, mapped to presentation by the UI.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Danger,
}

/// A transient message shown to the user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

struct Inner {
    tx: watch::Sender<Option<Notice>>,
    /// Handle of the pending clear, aborted when a newer notice lands.
    pending_clear: Mutex<Option<JoinHandle<()>>>,
    clear_after: Duration,
}

/// Publishes the current notice to any number of watchers.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_clear_after(CLEAR_AFTER)
    }

    /// Build a notifier with a custom expiry, used by tests.
    pub fn with_clear_after(clear_after: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                tx,
                pending_clear: Mutex::new(None),
                clear_after,
            }),
        }
    }

    /// Subscribe to notice updates.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notice>> {
        self.inner.tx.subscribe()
    }

    /// The notice currently visible, if any.
    pub fn current(&self) -> Option<Notice> {
        self.inner.tx.borrow().clone()
    }

    /// Show a notice, replacing the current one, and schedule its
    /// expiry. The previous pending expiry is cancelled first.
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let notice = Notice::new(message, severity);
        tracing::debug!(message = %notice.message, ?severity, "showing notice");

        let handle = {
            let inner = Arc::clone(&self.inner);
            tokio::spawn(async move {
                tokio::time::sleep(inner.clear_after).await;
                inner.tx.send_replace(None);
            })
        };

        let mut pending = self
            .inner
            .pending_clear
            .lock()
            .expect("pending_clear lock poisoned");
        if let Some(old) = pending.replace(handle) {
            old.abort();
        }
        drop(pending);

        self.inner.tx.send_replace(Some(notice));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
