//! Notifications
//!
//! `Notifier` is the seam batch actions report through. The page uses
//! [`ToastNotifier`], which renders through `ToastHost`; tests record calls.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Auto-dismiss delay for success/error toasts
const TOAST_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Loading,
    Success,
    Error,
}

pub trait Notifier {
    /// Show a progress notice that stays until dismissed
    fn loading(&self, message: &str) -> NoticeId;
    fn dismiss(&self, id: NoticeId);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
}

/// Notifier backed by a toast list signal
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    pub toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn push(&self, kind: NoticeKind, message: &str) -> NoticeId {
        let id = NoticeId(self.next_id.get_value());
        self.next_id.update_value(|n| *n = n.wrapping_add(1));
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });
        id
    }

    fn push_timed(&self, kind: NoticeKind, message: &str) {
        let id = self.push(kind, message);
        let this = *self;
        Timeout::new(TOAST_MS, move || this.dismiss(id)).forget();
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn loading(&self, message: &str) -> NoticeId {
        self.push(NoticeKind::Loading, message)
    }

    fn dismiss(&self, id: NoticeId) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn success(&self, message: &str) {
        self.push_timed(NoticeKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push_timed(NoticeKind::Error, message);
    }
}
