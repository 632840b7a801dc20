// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! User-facing notification store: an explicit component passed by reference
//! to whatever needs to emit messages, instead of an ambient global.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use crate::store::StoreError;

pub const SUCCESS_DURATION: Duration = Duration::from_secs(5);
pub const ERROR_DURATION: Duration = Duration::from_secs(8);
pub const WARNING_DURATION: Duration = Duration::from_secs(6);
pub const INFO_DURATION: Duration = Duration::from_secs(5);

/// Severity of a notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

pub type NotificationId = u64;

/// One active message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub title: String,
    pub message: String,

    /// Auto-expiry delay; `None` keeps the message until dismissed.
    pub duration: Option<Duration>,

    pub dismissible: bool,
}

/// Ordered collection of active messages with per-message auto-expiry.
///
/// Cloning shares the underlying store. Subscribers observe every change to
/// the active list; dropping the receiver unsubscribes. Auto-expiry is
/// scheduled on the ambient tokio runtime, so pushing with a duration
/// requires one.
#[derive(Debug, Clone)]
pub struct Notifications {
    active: watch::Sender<Vec<Notification>>,
    next_id: Arc<AtomicU64>,
}

impl Notifications {
    pub fn new() -> Self {
        let (active, _) = watch::channel(Vec::new());
        Self {
            active,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Observes the active message list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.active.subscribe()
    }

    /// Snapshot of the active messages, oldest first.
    pub fn active(&self) -> Vec<Notification> {
        self.active.borrow().clone()
    }

    pub fn success(&self, title: &str, message: &str) -> NotificationId {
        self.push(Severity::Success, title, message, Some(SUCCESS_DURATION))
    }

    pub fn error(&self, title: &str, message: &str) -> NotificationId {
        self.push(Severity::Error, title, message, Some(ERROR_DURATION))
    }

    pub fn warning(&self, title: &str, message: &str) -> NotificationId {
        self.push(Severity::Warning, title, message, Some(WARNING_DURATION))
    }

    pub fn info(&self, title: &str, message: &str) -> NotificationId {
        self.push(Severity::Info, title, message, Some(INFO_DURATION))
    }

    /// Surfaces a store failure, preferring the API's message field and
    /// falling back to `fallback` when the store sent none.
    pub fn store_error(&self, title: &str, err: &StoreError, fallback: &str) -> NotificationId {
        let message = match err {
            StoreError::Api { message, .. } if !message.is_empty() => message.clone(),
            StoreError::Api { .. } => fallback.to_string(),
            other => other.to_string(),
        };
        self.push(Severity::Error, title, &message, Some(ERROR_DURATION))
    }

    /// Appends a message and schedules its expiry.
    pub fn push(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        duration: Option<Duration>,
    ) -> NotificationId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            id,
            severity,
            title: title.to_string(),
            message: message.to_string(),
            duration,
            dismissible: true,
        };

        self.active.send_modify(|active| active.push(notification));

        if let Some(delay) = duration {
            let store = self.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                store.dismiss(id);
            });
        }

        id
    }

    pub fn dismiss(&self, id: NotificationId) {
        self.active.send_modify(|active| active.retain(|n| n.id != id));
    }

    pub fn dismiss_all(&self) {
        self.active.send_modify(Vec::clear);
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}
