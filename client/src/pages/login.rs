//! Staff sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::BrowserAuthClient;
use crate::net::types::Credentials;
#[cfg(feature = "hydrate")]
use crate::net::types::User;
use crate::state::stores::use_stores;
use crate::util::auth::should_skip_login;

/// Where a successful sign-in lands.
pub const AFTER_LOGIN_PATH: &str = "/dashboard";

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let stores = use_stores();
    let client = expect_context::<BrowserAuthClient>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: go straight to the dashboard.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if should_skip_login(stores.auth.with(|a| a.status)) && !busy.get_untracked() {
            navigate_home(AFTER_LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match client.login(&credentials).await {
                    Ok(body) => match client.persist_token(&body) {
                        Some(token) => {
                            let user = User::from_value(&body);
                            stores.auth.update(|a| a.sign_in(token, user));
                            stores.notify_success("Welcome back");
                            navigate(AFTER_LOGIN_PATH, NavigateOptions::default());
                        }
                        None => {
                            info.set("Login response carried no session token.".to_owned());
                            stores.notify_error("Login failed");
                        }
                    },
                    Err(e) => {
                        info.set(e.to_string());
                        stores.notify_error(e.to_string());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, &client, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Innkeeper"</h1>
                <p class="login-card__subtitle">"Staff sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@hotel.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a href="/request-access" class="login-link">"Need an account? Request access"</a>
            </div>
        </div>
    }
}
