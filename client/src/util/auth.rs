//! Protected-route gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route goes through [`gate`]; protected routes render only for an
//! authenticated session and redirect to `/login` otherwise. While the session
//! is still `Unknown` the gate holds on the loading fallback, so a protected
//! page never flashes before the restore step decides.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::LOGIN_PATH;
use crate::state::auth::SessionStatus;

/// What the router should show for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Pending,
    Redirect(&'static str),
}

/// Decide how to treat a route given the current session status.
pub fn gate(protected: bool, status: SessionStatus) -> GateDecision {
    if !protected {
        return GateDecision::Render;
    }
    match status {
        SessionStatus::Authenticated => GateDecision::Render,
        SessionStatus::Unknown => GateDecision::Pending,
        SessionStatus::Unauthenticated => GateDecision::Redirect(LOGIN_PATH),
    }
}

/// Whether the login page should bounce an already signed-in user onward.
pub fn should_skip_login(status: SessionStatus) -> bool {
    status == SessionStatus::Authenticated
}
