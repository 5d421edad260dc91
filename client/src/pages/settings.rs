//! User settings page.

use leptos::prelude::*;

use crate::components::nav::AppNav;
use crate::state::stores::use_stores;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let stores = use_stores();
    let dark = move || stores.theme.with(|t| t.dark);

    view! {
        <div class="app-page">
            <AppNav/>
            <main class="settings-page">
                <h1>"Settings"</h1>
                <section class="settings-group">
                    <h2>"Appearance"</h2>
                    <label class="settings-toggle">
                        <input
                            type="checkbox"
                            prop:checked=dark
                            on:change=move |_| stores.theme.update(|t| t.toggle())
                        />
                        "Dark mode"
                    </label>
                </section>
            </main>
        </div>
    }
}
