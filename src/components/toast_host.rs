//! Toast Host Component
//!
//! Renders the notifier's toast list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::notify::NoticeKind;

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Loading => "toast toast-loading",
        NoticeKind::Success => "toast toast-success",
        NoticeKind::Error => "toast toast-error",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_app_context().notifier.toasts;

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id.0
                children=|toast| view! {
                    <div class=toast_class(toast.kind)>{toast.message}</div>
                }
            />
        </div>
    }
}
