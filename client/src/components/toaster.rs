//! Global toast surface (top-right).

use leptos::prelude::*;

use crate::state::stores::use_stores;
use crate::state::toast::{Toast, ToastKind};

/// Renders the toast queue; each toast dismisses itself after its duration.
#[component]
pub fn Toaster() -> impl IntoView {
    let stores = use_stores();

    view! {
        <div class="toaster toaster--top-right" aria-live="polite">
            <For
                each=move || stores.toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let stores = use_stores();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        let after = toast.kind.duration();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(after).await;
            stores.toasts.update(|t| t.dismiss(id));
        });
    }

    let (class, icon) = match toast.kind {
        ToastKind::Success => ("toast toast--success", "✓"),
        ToastKind::Error => ("toast toast--error", "!"),
    };

    view! {
        <div
            class=class
            role="status"
            style="background: #333; color: #fff;"
            on:click=move |_| stores.toasts.update(|t| t.dismiss(id))
        >
            <span class="toast__icon">{icon}</span>
            <span class="toast__message">{toast.message}</span>
        </div>
    }
}
