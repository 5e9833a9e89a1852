//! Toast notifications.
//!
//! A `Notifier` is provided once at the root; any page can push a success or
//! error message. Toasts remove themselves after the configured timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::config::config;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    timeout_ms: u32,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            timeout_ms: config().ui.toast_timeout_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = Uuid::new_v4();
        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.timeout_ms).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not provided in context")
}

/// Renders the toast stack in the bottom-right corner.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let (class, icon_name) = match toast.kind {
                        ToastKind::Success => ("toast toast--success", "check"),
                        ToastKind::Error => ("toast toast--error", "alert-circle"),
                    };
                    view! {
                        <div class=class role="status">
                            {icon(icon_name)}
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| notifier.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
