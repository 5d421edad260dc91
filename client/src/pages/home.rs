//! Public front page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::stores::use_stores;

#[component]
pub fn HomePage() -> impl IntoView {
    let stores = use_stores();
    let signed_in = move || stores.auth.with(AuthState::is_authenticated);

    view! {
        <div class="home-page">
            <header class="home-hero">
                <h1>"Innkeeper"</h1>
                <p>"Front desk, housekeeping and reservations in one place."</p>
                <div class="home-hero__actions">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/login">"Sign in"</a>
                                <a class="btn" href="/request-access">"Request access"</a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href="/dashboard">"Open dashboard"</a>
                    </Show>
                    <a class="btn" href="/landing">"Learn more"</a>
                </div>
            </header>
        </div>
    }
}
