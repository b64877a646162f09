#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::StateError;

/// Authentication state published by the external auth store.
///
/// The shell only reflects this state; an absent user means unauthenticated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthState {
    pub user: Option<UserRecord>,
}

impl AuthState {
    /// Decode a bootstrap document. `null` and a missing `user` both mean
    /// unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Decode`] if `raw` does not match the model shape.
    pub fn from_json(raw: &str) -> Result<Self, StateError> {
        serde_json::from_str(raw).map_err(StateError::decode("auth"))
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Authenticated user as the auth store describes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl UserRecord {
    #[must_use]
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into(), attributes: Map::new() }
    }

    /// Display name, when the auth store supplies one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }
}

/// User identifier; auth backends disagree on numeric vs string ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}
