//! Wire DTOs and transport errors for the authentication backend.
//!
//! DESIGN
//! ======
//! `User` is treated as an opaque record: only `name` and `token` are read by
//! the session layer, every other field is carried through `extra` so the
//! record survives a localStorage round-trip unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Reason shown when the backend gives no usable message.
pub const GENERIC_FAILURE_REASON: &str = "Something went wrong, please try again.";

/// Reason shown when the backend rejects the session without a message.
pub const UNAUTHORIZED_REASON: &str = "Unauthorized! Logging Out...";

/// An authenticated user as returned by the `/auth/*` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Login email, if the backend returned it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Bearer token used for authenticated requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Any fields this client does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Minimal user record carrying only a display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            last_name: None,
            location: None,
            token: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Body for `PATCH /auth/updateUser`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    pub name: String,
    pub email: String,
    pub last_name: String,
    pub location: String,
}

/// Successful auth response envelope.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    user: User,
}

/// Extract the `user` field from a successful response body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body carries no usable `user`.
pub fn user_from_body(body: serde_json::Value) -> Result<User, ApiError> {
    serde_json::from_value::<AuthResponse>(body)
        .map(|resp| resp.user)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull the server-provided message out of an error body.
///
/// The Jobster backend reports failures as `{ "msg": "..." }`; `message` is
/// accepted as well.
pub fn error_message_from_body(body: &serde_json::Value) -> Option<String> {
    ["msg", "message"]
        .iter()
        .filter_map(|key| body.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_owned)
}

/// Errors produced by transport calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request rejected with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body could not be interpreted.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status, when the backend responded at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend invalidated the current session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Single human-readable reason suitable for an error toast.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Status { status: 401, .. } => UNAUTHORIZED_REASON.to_owned(),
            _ => GENERIC_FAILURE_REASON.to_owned(),
        }
    }
}
