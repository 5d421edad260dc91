//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! The backend response shapes are not owned by this client, so profile
//! parsing is lenient: ids may arrive as strings or numbers, and unknown
//! fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Login form payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Access-request payload for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Requested staff role (e.g. `"staff"`, `"manager"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// The signed-in staff member as returned by `GET /auth/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier; accepts `id` or `_id`, string or number.
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email, if exposed.
    #[serde(default)]
    pub email: Option<String>,
    /// Staff role (e.g. `"admin"`, `"manager"`), if exposed.
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Leniently read a profile out of an uninterpreted response body.
    ///
    /// Accepts either a bare profile object or one wrapped in `{"user": ...}`.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let candidate = value.get("user").filter(|v| v.is_object()).unwrap_or(value);
        serde_json::from_value(candidate.clone()).ok()
    }

    /// Name suitable for page chrome; falls back to the email, then the id.
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            return &self.name;
        }
        self.email.as_deref().filter(|e| !e.is_empty()).unwrap_or(&self.id)
    }
}

/// Extract the session token from a login/signup response body.
pub fn session_token(body: &serde_json::Value) -> Option<&str> {
    body.get("token")
        .and_then(serde_json::Value::as_str)
        .filter(|t| !t.is_empty())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
