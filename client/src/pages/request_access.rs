//! Access-request (signup) page.

#[cfg(test)]
#[path = "request_access_test.rs"]
mod request_access_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::BrowserAuthClient;
use crate::net::types::SignupRequest;
#[cfg(feature = "hydrate")]
use crate::net::types::User;
#[cfg(feature = "hydrate")]
use crate::pages::login::AFTER_LOGIN_PATH;
use crate::routes::LOGIN_PATH;
use crate::state::stores::use_stores;

const MIN_PASSWORD_LEN: usize = 8;

/// Roles a requester may ask for.
pub const REQUESTABLE_ROLES: &[&str] = &["staff", "manager"];

fn validate_signup_input(name: &str, email: &str, password: &str, role: &str) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Enter your name and email.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    let role = REQUESTABLE_ROLES.iter().find(|r| **r == role).map(|r| (*r).to_owned());
    Ok(SignupRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned(), role })
}

#[component]
pub fn RequestAccessPage() -> impl IntoView {
    let stores = use_stores();
    let client = expect_context::<BrowserAuthClient>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(REQUESTABLE_ROLES[0].to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup_input(&name.get(), &email.get(), &password.get(), &role.get()) {
            Ok(r) => r,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending request...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match client.signup(&request).await {
                    Ok(body) => {
                        // Some deployments sign the requester in immediately.
                        if let Some(token) = client.persist_token(&body) {
                            stores.auth.update(|a| a.sign_in(token, User::from_value(&body)));
                            stores.notify_success("Account created");
                            navigate(AFTER_LOGIN_PATH, NavigateOptions::default());
                        } else {
                            stores.notify_success("Request sent. An administrator will review it.");
                            navigate(LOGIN_PATH, NavigateOptions::default());
                        }
                    }
                    Err(e) => {
                        info.set(e.to_string());
                        stores.notify_error(e.to_string());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, &client, &navigate, stores);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Request Access"</h1>
                <p class="login-card__subtitle">"Staff accounts are approved by an administrator."</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {REQUESTABLE_ROLES
                            .iter()
                            .map(|r| view! { <option value=*r>{*r}</option> })
                            .collect_view()}
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Request Access"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a href=LOGIN_PATH class="login-link">"Already have an account? Sign in"</a>
            </div>
        </div>
    }
}
