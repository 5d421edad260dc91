//! Session state for the signed-in staff member.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route gate and by identity-aware pages. The status starts
//! `Unknown` (always the case during server rendering, since the token lives in
//! browser storage) and is resolved once after mount by [`AuthState::restore`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::AuthError;
use crate::net::types::User;

/// Whether a session exists, as far as the client knows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Start-up restore has not run yet.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Authentication state: token, cached profile, and resolved status.
///
/// A present token means a login/signup response was persisted. A missing
/// `user` only means the profile has not been fetched yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: SessionStatus,
    pub token: Option<String>,
    pub user: Option<User>,
}

/// What the start-up profile fetch did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileOutcome {
    /// Profile cached on the session.
    Loaded,
    /// The server rejected the token; the session was cleared.
    Expired,
    /// Transient failure; the session is kept without a profile.
    Kept(AuthError),
}

impl AuthState {
    /// Resolve the start-up status from the persisted token.
    pub fn restore(&mut self, token: Option<String>) {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => {
                self.token = Some(token);
                self.status = SessionStatus::Authenticated;
            }
            None => self.sign_out(),
        }
    }

    /// Record a successful login/signup.
    pub fn sign_in(&mut self, token: String, user: Option<User>) {
        self.token = Some(token);
        self.user = user;
        self.status = SessionStatus::Authenticated;
    }

    /// Cache the profile for the current session.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drop token and profile.
    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
        self.status = SessionStatus::Unauthenticated;
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Apply the result of `GET /auth/user` to the session.
    ///
    /// A 401 (or a missing credential) ends the session; other failures keep
    /// it, since the profile is optional.
    pub fn apply_profile(&mut self, result: Result<serde_json::Value, AuthError>) -> ProfileOutcome {
        match result {
            Ok(body) => match User::from_value(&body) {
                Some(user) => {
                    self.set_user(user);
                    ProfileOutcome::Loaded
                }
                None => ProfileOutcome::Kept(AuthError::Decode("unrecognized profile".to_owned())),
            },
            Err(e) if e.is_unauthorized() || e == AuthError::MissingCredential => {
                self.sign_out();
                ProfileOutcome::Expired
            }
            Err(e) => ProfileOutcome::Kept(e),
        }
    }
}
