//! Top navigation shown on signed-in pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::modal::ModalKind;
use crate::state::stores::use_stores;

const LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/rooms", "Rooms"),
    ("/reservations", "Reservations"),
    ("/guests", "Guests"),
    ("/tasks", "Tasks"),
    ("/billing", "Billing"),
    ("/services", "Services"),
    ("/reports", "Reports"),
    ("/settings", "Settings"),
];

#[component]
pub fn AppNav() -> impl IntoView {
    let stores = use_stores();
    let who = move || {
        stores
            .auth
            .with(|a| a.user.as_ref().map(|u| u.display_name().to_owned()))
            .unwrap_or_else(|| "Account".to_owned())
    };

    view! {
        <nav class="app-nav">
            <span class="app-nav__brand">"Innkeeper"</span>
            <ul class="app-nav__links">
                {LINKS
                    .iter()
                    .map(|(href, label)| view! { <li><A href=*href>{*label}</A></li> })
                    .collect_view()}
            </ul>
            <button
                class="app-nav__user btn"
                aria-haspopup="dialog"
                aria-expanded=move || stores.modal.with(|m| m.is_open(&ModalKind::Profile)).to_string()
                on:click=move |_| stores.modal.update(|m| m.open(ModalKind::Profile))
            >
                {who}
            </button>
        </nav>
    }
}
