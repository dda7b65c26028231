//! Transient toast notifications.
//!
//! [`Toast`] is a plain value so non-UI code (the submission workflow) can
//! produce it. [`ToastProvider`] owns the queue, renders it in a corner of the
//! screen, and dismisses each toast after [`TOAST_TIMEOUT`].

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::time::sleep;

pub const TOAST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Toasts {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl Toasts {
    /// Queue a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, toast });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast and schedule its dismissal.
///
/// The timer runs at the root scope, so it outlives the page that raised the
/// toast.
pub fn show_toast(toasts: &mut Signal<Toasts>, toast: Toast) {
    let id = toasts.write().push(toast);
    let mut toasts = *toasts;
    spawn_forever(async move {
        sleep(TOAST_TIMEOUT).await;
        toasts.write().dismiss(id);
    });
}

/// Provides the toast queue and renders it above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        div {
            class: "toast-container fixed top-4 right-4 z-50 flex flex-col gap-2",
            for entry in toasts.read().entries().iter().cloned() {
                div {
                    key: "{entry.id}",
                    class: match entry.toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    },
                    role: "status",
                    onclick: move |_| toasts.write().dismiss(entry.id),
                    "{entry.toast.message}"
                }
            }
        }
    }
}
