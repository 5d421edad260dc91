use std::cell::RefCell;
use std::collections::VecDeque;

use futures::executor::block_on;

use super::*;
use crate::net::transport::Method;
use crate::util::storage::MemoryTokenStore;

// =============================================================
// Helpers
// =============================================================

/// Transport that replays canned outcomes and records every request.
#[derive(Default)]
struct MockTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, String>>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    fn replying(status: u16, body: &str) -> Self {
        let mock = Self::default();
        mock.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        mock
    }

    fn failing(message: &str) -> Self {
        let mock = Self::default();
        mock.replies.borrow_mut().push_back(Err(message.to_owned()));
        mock
    }

    fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl HttpTransport for &MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no reply queued".to_owned()))
    }
}

const BASE: &str = "http://localhost:5000/api";

fn creds() -> Credentials {
    Credentials { email: "desk@hotel.test".to_owned(), password: "secret".to_owned() }
}

#[test]
fn new_trims_trailing_slash_from_base_url() {
    let mock = MockTransport::default();
    let client = AuthClient::new(format!("{BASE}/"), &mock, MemoryTokenStore::default());
    assert_eq!(client.base_url(), BASE);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_posts_json_to_login_endpoint() {
    let mock = MockTransport::replying(200, r#"{"token":"t-1"}"#);
    let client = AuthClient::new(BASE, &mock, MemoryTokenStore::default());

    let body = block_on(client.login(&creds())).unwrap();
    assert_eq!(body["token"], "t-1");

    let sent = mock.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "http://localhost:5000/api/auth/login");
    assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    let payload: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(payload["email"], "desk@hotel.test");
    assert_eq!(payload["password"], "secret");
}

#[test]
fn login_with_bad_credentials_is_request_failed() {
    let mock = MockTransport::replying(401, r#"{"message":"Invalid credentials"}"#);
    let client = AuthClient::new(BASE, &mock, MemoryTokenStore::default());

    let err = block_on(client.login(&creds())).unwrap_err();
    assert_eq!(err, AuthError::RequestFailed { operation: AuthOperation::Login, status: 401 });
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Login failed (HTTP 401)");
}

#[test]
fn login_transport_failure_is_network_error() {
    let mock = MockTransport::failing("connection refused");
    let client = AuthClient::new(BASE, &mock, MemoryTokenStore::default());

    let err = block_on(client.login(&creds())).unwrap_err();
    assert_eq!(err, AuthError::Network("connection refused".to_owned()));
}

#[test]
fn login_does_not_persist_token_by_itself() {
    let mock = MockTransport::replying(200, r#"{"token":"t-1"}"#);
    let tokens = MemoryTokenStore::default();
    let client = AuthClient::new(BASE, &mock, tokens.clone());

    block_on(client.login(&creds())).unwrap();
    assert!(tokens.token().is_none());
}

#[test]
fn success_body_is_passed_through_uninterpreted() {
    let mock = MockTransport::replying(200, r#"[1,"two",{"three":3}]"#);
    let client = AuthClient::new(BASE, &mock, MemoryTokenStore::default());

    let body = block_on(client.login(&creds())).unwrap();
    assert_eq!(body, serde_json::json!([1, "two", {"three": 3}]));
}

#[test]
fn non_json_success_body_is_decode_error() {
    let mock = MockTransport::replying(200, "<html>oops</html>");
    let client = AuthClient::new(BASE, &mock, MemoryTokenStore::default());

    let err = block_on(client.login(&creds())).unwrap_err();
    assert!(matches!(err, AuthError::Decode(_)));
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_posts_to_signup_endpoint() {
    let mock = MockTransport::replying(201, r#"{"id":"u-7"}"#);
    let client = AuthClient::new(format!("{BASE}/"), &mock, MemoryTokenStore::default());

    let payload = serde_json::json!({ "name": "Ari", "email": "ari@hotel.test" });
    let body = block_on(client.signup(&payload)).unwrap();
    assert_eq!(body["id"], "u-7");
    assert_eq!(mock.sent.borrow()[0].url, "http://localhost:5000/api/auth/signup");
}

#[test]
fn signup_server_error_is_request_failed() {
    let mock = MockTransport::replying(500, "");
    let client = AuthClient::new(BASE, &mock, MemoryTokenStore::default());

    let err = block_on(client.signup(&serde_json::json!({}))).unwrap_err();
    assert_eq!(err.to_string(), "Signup failed (HTTP 500)");
    assert!(!err.is_unauthorized());
}

// =============================================================
// get_user
// =============================================================

#[test]
fn get_user_without_token_fails_before_network() {
    let mock = MockTransport::replying(200, "{}");
    let client = AuthClient::new(BASE, &mock, MemoryTokenStore::default());

    let err = block_on(client.get_user()).unwrap_err();
    assert_eq!(err, AuthError::MissingCredential);
    assert_eq!(mock.calls(), 0);
}

#[test]
fn get_user_sends_bearer_token() {
    let mock = MockTransport::replying(200, r#"{"id":"u-1","name":"Dana"}"#);
    let client = AuthClient::new(BASE, &mock, MemoryTokenStore::with_token("abc"));

    let body = block_on(client.get_user()).unwrap();
    assert_eq!(body["name"], "Dana");

    let sent = mock.sent.borrow();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, "http://localhost:5000/api/auth/user");
    assert_eq!(sent[0].header("Authorization"), Some("Bearer abc"));
}

#[test]
fn get_user_expired_token_is_unauthorized() {
    let mock = MockTransport::replying(401, "");
    let client = AuthClient::new(BASE, &mock, MemoryTokenStore::with_token("stale"));

    let err = block_on(client.get_user()).unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Failed to fetch user data (HTTP 401)");
}

// =============================================================
// Token persistence
// =============================================================

#[test]
fn persist_token_writes_store() {
    let mock = MockTransport::default();
    let tokens = MemoryTokenStore::default();
    let client = AuthClient::new(BASE, &mock, tokens.clone());

    let stored = client.persist_token(&serde_json::json!({ "token": "fresh" }));
    assert_eq!(stored.as_deref(), Some("fresh"));
    assert_eq!(tokens.token().as_deref(), Some("fresh"));

    client.logout();
    assert!(tokens.token().is_none());
}

#[test]
fn persist_token_ignores_tokenless_body() {
    let mock = MockTransport::default();
    let tokens = MemoryTokenStore::with_token("kept");
    let client = AuthClient::new(BASE, &mock, tokens.clone());

    assert!(client.persist_token(&serde_json::json!({ "ok": true })).is_none());
    assert_eq!(tokens.token().as_deref(), Some("kept"));
}

#[test]
fn missing_credential_message_matches_ui_copy() {
    assert_eq!(AuthError::MissingCredential.to_string(), "No token found");
}
