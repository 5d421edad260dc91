use super::*;
use crate::net::api::AuthOperation;

fn user() -> User {
    User { id: "u-1".to_owned(), name: "Dana".to_owned(), email: None, role: Some("admin".to_owned()) }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_unknown() {
    let state = AuthState::default();
    assert_eq!(state.status, SessionStatus::Unknown);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_token_authenticates_without_profile() {
    let mut state = AuthState::default();
    state.restore(Some("tok".to_owned()));
    assert_eq!(state.status, SessionStatus::Authenticated);
    assert_eq!(state.token.as_deref(), Some("tok"));
    assert!(state.user.is_none());
}

#[test]
fn restore_without_token_is_unauthenticated() {
    let mut state = AuthState::default();
    state.restore(None);
    assert_eq!(state.status, SessionStatus::Unauthenticated);
}

#[test]
fn restore_with_empty_token_is_unauthenticated() {
    let mut state = AuthState::default();
    state.restore(Some(String::new()));
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.token.is_none());
}

// =============================================================
// sign in / out
// =============================================================

#[test]
fn sign_in_then_sign_out() {
    let mut state = AuthState::default();
    state.sign_in("tok".to_owned(), Some(user()));
    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(user()));

    state.sign_out();
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

// =============================================================
// apply_profile
// =============================================================

#[test]
fn apply_profile_caches_user() {
    let mut state = AuthState::default();
    state.restore(Some("tok".to_owned()));
    let outcome = state.apply_profile(Ok(serde_json::json!({ "id": "u-1", "name": "Dana", "role": "admin" })));
    assert_eq!(outcome, ProfileOutcome::Loaded);
    assert_eq!(state.user, Some(user()));
}

#[test]
fn apply_profile_unauthorized_clears_session() {
    let mut state = AuthState::default();
    state.restore(Some("stale".to_owned()));
    let outcome = state.apply_profile(Err(AuthError::RequestFailed {
        operation: AuthOperation::FetchUser,
        status: 401,
    }));
    assert_eq!(outcome, ProfileOutcome::Expired);
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.token.is_none());
}

#[test]
fn apply_profile_network_error_keeps_session() {
    let mut state = AuthState::default();
    state.restore(Some("tok".to_owned()));
    let err = AuthError::Network("offline".to_owned());
    let outcome = state.apply_profile(Err(err.clone()));
    assert_eq!(outcome, ProfileOutcome::Kept(err));
    assert!(state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn apply_profile_unrecognized_body_keeps_session() {
    let mut state = AuthState::default();
    state.restore(Some("tok".to_owned()));
    let outcome = state.apply_profile(Ok(serde_json::json!("hello")));
    assert!(matches!(outcome, ProfileOutcome::Kept(AuthError::Decode(_))));
    assert!(state.is_authenticated());
}
