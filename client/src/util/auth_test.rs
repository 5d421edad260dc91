use super::*;
use crate::routes::{NOT_FOUND, PageId, ROUTES, descriptor};

const STATUSES: [SessionStatus; 3] =
    [SessionStatus::Unknown, SessionStatus::Authenticated, SessionStatus::Unauthenticated];

#[test]
fn protected_routes_redirect_without_session() {
    for route in ROUTES.iter().filter(|r| r.protected) {
        assert_eq!(
            gate(route.protected, SessionStatus::Unauthenticated),
            GateDecision::Redirect("/login"),
            "path {}",
            route.path
        );
    }
}

#[test]
fn protected_routes_render_with_session() {
    for route in ROUTES.iter().filter(|r| r.protected) {
        assert_eq!(gate(route.protected, SessionStatus::Authenticated), GateDecision::Render, "path {}", route.path);
    }
}

#[test]
fn protected_routes_never_render_while_unknown() {
    for route in ROUTES.iter().filter(|r| r.protected) {
        assert_eq!(gate(route.protected, SessionStatus::Unknown), GateDecision::Pending);
    }
}

#[test]
fn public_routes_render_in_every_state() {
    for route in ROUTES.iter().filter(|r| !r.protected) {
        for status in STATUSES {
            assert_eq!(gate(route.protected, status), GateDecision::Render);
        }
    }
}

#[test]
fn not_found_renders_without_session() {
    let route = descriptor(PageId::NotFound);
    assert_eq!(route, &NOT_FOUND);
    assert_eq!(gate(route.protected, SessionStatus::Unauthenticated), GateDecision::Render);
}

#[test]
fn login_is_skipped_only_when_authenticated() {
    assert!(should_skip_login(SessionStatus::Authenticated));
    assert!(!should_skip_login(SessionStatus::Unknown));
    assert!(!should_skip_login(SessionStatus::Unauthenticated));
}
