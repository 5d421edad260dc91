use super::*;
use crate::net::api::{AuthError, AuthOperation};
use crate::routes::LOGIN_PATH;

// =============================================================
// session_gate over the session lifecycle
// =============================================================

#[test]
fn session_gate_is_pending_before_restore() {
    assert_eq!(session_gate(&AuthState::default()), GateDecision::Pending);
}

#[test]
fn session_gate_redirects_when_restore_finds_no_token() {
    let mut auth = AuthState::default();
    auth.restore(None);
    assert_eq!(session_gate(&auth), GateDecision::Redirect(LOGIN_PATH));

    auth.restore(Some(String::new()));
    assert_eq!(session_gate(&auth), GateDecision::Redirect(LOGIN_PATH));
}

#[test]
fn session_gate_renders_once_a_token_is_restored() {
    let mut auth = AuthState::default();
    auth.restore(Some("tok".to_owned()));
    assert_eq!(session_gate(&auth), GateDecision::Render);
}

#[test]
fn session_gate_redirects_after_rejected_profile() {
    let mut auth = AuthState::default();
    auth.restore(Some("stale".to_owned()));
    auth.apply_profile(Err(AuthError::RequestFailed { operation: AuthOperation::FetchUser, status: 401 }));
    assert_eq!(session_gate(&auth), GateDecision::Redirect(LOGIN_PATH));
}

#[test]
fn session_gate_redirects_after_sign_out() {
    let mut auth = AuthState::default();
    auth.sign_in("tok".to_owned(), None);
    assert_eq!(session_gate(&auth), GateDecision::Render);
    auth.sign_out();
    assert_eq!(session_gate(&auth), GateDecision::Redirect(LOGIN_PATH));
}
