//! Current user's profile.
//!
//! The page can re-fetch the profile from the auth service. A 401 on that
//! call means the stored token is no longer accepted, so the session is
//! cleared and the gate sends the user back to sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav::AppNav;
use crate::net::api::BrowserAuthClient;
use crate::net::types::User;
use crate::routes::LOGIN_PATH;
use crate::state::stores::use_stores;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let stores = use_stores();
    let client = expect_context::<BrowserAuthClient>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let field = move |pick: fn(&User) -> Option<String>| {
        move || stores.auth.with(|a| a.user.as_ref().and_then(pick)).unwrap_or_else(|| "-".to_owned())
    };
    let name = field(|u| Some(u.display_name().to_owned()));
    let email = field(|u| u.email.clone());
    let role = field(|u| u.role.clone());
    let id = field(|u| Some(u.id.clone()));

    let refresh_client = client.clone();
    let on_refresh = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::state::auth::ProfileOutcome;

            let client = refresh_client.clone();
            leptos::task::spawn_local(async move {
                let result = client.get_user().await;
                match stores.auth.try_update(|a| a.apply_profile(result)) {
                    Some(ProfileOutcome::Loaded) => stores.notify_success("Profile refreshed"),
                    Some(ProfileOutcome::Expired) => {
                        client.logout();
                        stores.notify_error("Session expired. Please sign in again.");
                    }
                    Some(ProfileOutcome::Kept(e)) => stores.notify_error(e.to_string()),
                    None => {}
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &refresh_client;
    };

    let on_sign_out = move |_| {
        client.logout();
        stores.auth.update(|a| a.sign_out());
        stores.notify_success("Signed out");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="app-page">
            <AppNav/>
            <main class="profile-page">
                <h1>"Profile"</h1>
                <dl class="profile-fields">
                    <dt>"Name"</dt>
                    <dd>{name}</dd>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                    <dt>"Role"</dt>
                    <dd>{role}</dd>
                    <dt>"User ID"</dt>
                    <dd>{id}</dd>
                </dl>
                <div class="profile-actions">
                    <button class="btn" disabled=move || busy.get() on:click=on_refresh>
                        "Refresh"
                    </button>
                    <button class="btn btn--danger" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </main>
        </div>
    }
}
