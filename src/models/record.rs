//! Record types: the untyped wire shape and the validated user record.

use serde::Serialize;

/// One element of the response body, exactly as received.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// A user record whose required fields were present with the right types.
///
/// Only the coercion step in [`crate::validate`] can build one, and the
/// fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    id: i64,
    name: String,
    username: String,
    email: String,
}

impl UserRecord {
    pub(crate) fn new(id: i64, name: String, username: String, email: String) -> Self {
        Self {
            id,
            name,
            username,
            email,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
