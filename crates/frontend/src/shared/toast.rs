use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

/// Application-wide toast notifications.
///
/// Provided once at the app root; any component can grab it from context
/// and fire `success`/`error`. Toasts auto-dismiss after a few seconds.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), body.into());
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), body.into());
    }

    fn push(&self, kind: ToastKind, title: String, body: String) {
        let id = Uuid::new_v4();
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                title,
                body,
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast list in a fixed corner. Mount exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast--success",
                        ToastKind::Error => "toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {kind_class}") on:click=move |_| svc.dismiss(id)>
                            <div class="toast__title">{toast.title.clone()}</div>
                            <div class="toast__body">{toast.body.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
