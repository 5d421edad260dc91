//! REST auth client for the backend API.
//!
//! Three calls: `signup`, `login`, and `get_user`. Success bodies are returned
//! as uninterpreted JSON; persisting the token from a login/signup response is
//! the caller's job (see [`AuthClient::persist_token`]).
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as [`AuthError`] and are never retried here. Pages catch
//! them and push an error toast.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::transport::{BrowserTransport, HttpRequest, HttpResponse, HttpTransport};
use super::types::{Credentials, session_token};
use crate::config::ClientConfig;
use crate::util::storage::{BrowserTokenStore, TokenStore};

/// Auth client wired to the browser's `fetch` and `localStorage`.
pub type BrowserAuthClient = AuthClient<BrowserTransport, BrowserTokenStore>;

/// Failure modes of the auth calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The transport could not complete the exchange.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{} (HTTP {status})", .operation.failure_message())]
    RequestFailed { operation: AuthOperation, status: u16 },
    /// A call needing a bearer token ran with none stored.
    #[error("No token found")]
    MissingCredential,
    /// A 2xx body that is not JSON at all.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl AuthError {
    /// Whether the server rejected the credential outright.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::RequestFailed { status: 401, .. })
    }
}

/// Which auth call failed; rendered as the user-facing failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Signup,
    Login,
    FetchUser,
}

impl AuthOperation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Signup => "Signup failed",
            Self::Login => "Login failed",
            Self::FetchUser => "Failed to fetch user data",
        }
    }
}

impl std::fmt::Display for AuthOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Signup => "signup",
            Self::Login => "login",
            Self::FetchUser => "fetch-user",
        })
    }
}

/// Auth API client over a transport and a token store.
#[derive(Clone, Debug)]
pub struct AuthClient<T, S> {
    base_url: String,
    transport: T,
    tokens: S,
}

impl BrowserAuthClient {
    /// Client for the configured API base URL using browser primitives.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone(), BrowserTransport, BrowserTokenStore)
    }
}

impl<T: HttpTransport, S: TokenStore> AuthClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, tokens: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport, tokens }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Register a new account via `POST {base}/auth/signup`.
    ///
    /// # Errors
    ///
    /// [`AuthError::Network`] if the request cannot be sent,
    /// [`AuthError::RequestFailed`] on a non-2xx status.
    pub async fn signup<B: Serialize>(&self, user_data: &B) -> Result<serde_json::Value, AuthError> {
        let request = HttpRequest::post_json(self.endpoint("/auth/signup"), encode(user_data)?);
        self.exchange(request, AuthOperation::Signup).await
    }

    /// Authenticate via `POST {base}/auth/login`.
    ///
    /// # Errors
    ///
    /// Same contract as [`AuthClient::signup`].
    pub async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, AuthError> {
        let request = HttpRequest::post_json(self.endpoint("/auth/login"), encode(credentials)?);
        self.exchange(request, AuthOperation::Login).await
    }

    /// Fetch the signed-in user via `GET {base}/auth/user`.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingCredential`] before any network call when no token
    /// is stored; otherwise the same contract as [`AuthClient::signup`].
    pub async fn get_user(&self) -> Result<serde_json::Value, AuthError> {
        let token = self.tokens.token().ok_or(AuthError::MissingCredential)?;
        let request = HttpRequest::get(self.endpoint("/auth/user")).with_bearer(&token);
        self.exchange(request, AuthOperation::FetchUser).await
    }

    /// Store the token carried by a login/signup response.
    ///
    /// Returns the token, or `None` when the body carries none.
    pub fn persist_token(&self, body: &serde_json::Value) -> Option<String> {
        let token = session_token(body)?.to_owned();
        self.tokens.set_token(&token);
        Some(token)
    }

    /// Forget the stored token.
    pub fn logout(&self) {
        self.tokens.clear_token();
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn exchange(&self, request: HttpRequest, operation: AuthOperation) -> Result<serde_json::Value, AuthError> {
        log::debug!("{operation} -> {}", request.url);
        let response = self
            .transport
            .send(request)
            .await
            .map_err(AuthError::Network)?;
        decode(response, operation)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, AuthError> {
    serde_json::to_string(body).map_err(|e| AuthError::Decode(e.to_string()))
}

fn decode(response: HttpResponse, operation: AuthOperation) -> Result<serde_json::Value, AuthError> {
    if !response.ok() {
        log::warn!("{operation} rejected with HTTP {}", response.status);
        return Err(AuthError::RequestFailed { operation, status: response.status });
    }
    if response.body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| AuthError::Decode(e.to_string()))
}
