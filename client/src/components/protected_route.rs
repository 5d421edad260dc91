//! Route wrapper that applies the session gate.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading::LoadingFallback;
use crate::state::auth::AuthState;
use crate::state::stores::use_stores;
use crate::util::auth::{GateDecision, gate};

/// Gate decision for a protected route given the current session.
fn session_gate(auth: &AuthState) -> GateDecision {
    gate(true, auth.status)
}

/// Render `children` only for an authenticated session.
///
/// Re-evaluated whenever the session store changes, so signing out anywhere
/// bounces the current page to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let stores = use_stores();
    let decision = Memo::new(move |_| stores.auth.with(session_gate));

    move || match decision.get() {
        GateDecision::Render => children().into_any(),
        GateDecision::Pending => view! { <LoadingFallback/> }.into_any(),
        GateDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
