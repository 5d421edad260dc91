//! Application root: HTML shell, context wiring and the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every request; `App` is mounted
//! under it on both sides. `App` provides, in order, the stores, the auth
//! client and the page loader, then declares one `<Route>` per entry of
//! [`crate::routes::ROUTES`].
//!
//! DESIGN
//! ======
//! Anything read from browser storage (session token, theme) is applied in a
//! mount effect rather than at construction, so the server-rendered markup
//! and the first client render agree. Until then the session is `Unknown` and
//! protected routes show the loading fallback.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::lazy_page::LazyPage;
use crate::components::modal_host::ModalHost;
use crate::components::not_found::NotFoundPage;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toaster::Toaster;
use crate::config::ClientConfig;
use crate::loader::{LoadPolicy, PageLoader, browser_timer};
use crate::net::api::BrowserAuthClient;
use crate::pages::{AppPageLoader, BundledPages, page_view};
use crate::routes::{Loading, PageId, descriptor};
use crate::state::stores::AppStores;
use crate::state::theme::ThemeState;
use crate::util::storage::TokenStore as _;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let stores = AppStores::new();
    stores.provide();

    let client = BrowserAuthClient::from_config(&config);
    log::debug!("auth api at {}", client.base_url());
    provide_context(client.clone());

    let loader: AppPageLoader = PageLoader::new(BundledPages, LoadPolicy::from(&config), browser_timer);
    provide_context(loader);

    // Seed browser-persisted state once, after mount.
    Effect::new(move |_| {
        stores.theme.set(ThemeState::from_preference());
        stores.restore_records();
        let token = client.tokens().token();
        let has_token = token.is_some();
        stores.auth.update(|a| a.restore(token));
        log::debug!("session restored: authenticated={has_token}");

        #[cfg(feature = "hydrate")]
        if has_token {
            use crate::state::auth::ProfileOutcome;

            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = client.get_user().await;
                match stores.auth.try_update(|a| a.apply_profile(result)) {
                    Some(ProfileOutcome::Expired) => {
                        client.logout();
                        stores.notify_error("Session expired. Please sign in again.");
                    }
                    Some(ProfileOutcome::Kept(e)) => log::warn!("profile refresh failed: {e}"),
                    Some(ProfileOutcome::Loaded) | None => {}
                }
            });
        }
    });

    stores.persist_records();
    Effect::new(move |_| stores.theme.get().apply());

    view! {
        <Stylesheet id="leptos" href="/pkg/innkeeper.css"/>
        <Title text="Innkeeper"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=|| view! { <RoutePage page=PageId::Home/> }/>
                <Route path=path!("/landing") view=|| view! { <RoutePage page=PageId::Landing/> }/>
                <Route path=path!("/login") view=|| view! { <RoutePage page=PageId::Login/> }/>
                <Route path=path!("/request-access") view=|| view! { <RoutePage page=PageId::RequestAccess/> }/>
                <Route path=path!("/dashboard") view=|| view! { <RoutePage page=PageId::Dashboard/> }/>
                <Route path=path!("/rooms") view=|| view! { <RoutePage page=PageId::Rooms/> }/>
                <Route path=path!("/reservations") view=|| view! { <RoutePage page=PageId::Reservations/> }/>
                <Route path=path!("/guests") view=|| view! { <RoutePage page=PageId::Guests/> }/>
                <Route path=path!("/tasks") view=|| view! { <RoutePage page=PageId::Tasks/> }/>
                <Route path=path!("/billing") view=|| view! { <RoutePage page=PageId::Billing/> }/>
                <Route path=path!("/services") view=|| view! { <RoutePage page=PageId::Services/> }/>
                <Route path=path!("/reports") view=|| view! { <RoutePage page=PageId::Reports/> }/>
                <Route path=path!("/profile") view=|| view! { <RoutePage page=PageId::Profile/> }/>
                <Route path=path!("/settings") view=|| view! { <RoutePage page=PageId::Settings/> }/>
                <Route
                    path=path!("/admin/access-control")
                    view=|| view! { <RoutePage page=PageId::AdminAccessControl/> }
                />
                <Route
                    path=path!("/manager/access-control")
                    view=|| view! { <RoutePage page=PageId::ManagerAccessControl/> }
                />
                <Route
                    path=path!("/test-access-requests")
                    view=|| view! { <RoutePage page=PageId::TestAccessRequests/> }
                />
            </Routes>
            <ModalHost/>
        </Router>
        <Toaster/>
    }
}

/// Body of one routed page: eager or lazy, gated when protected.
#[component]
fn RoutePage(page: PageId) -> impl IntoView {
    let route = descriptor(page);
    let body = move || match route.loading {
        Loading::Eager => page_view(page)(),
        Loading::Lazy => view! { <LazyPage page=page/> }.into_any(),
    };

    if route.protected {
        view! { <ProtectedRoute>{body()}</ProtectedRoute> }.into_any()
    } else {
        body()
    }
}
