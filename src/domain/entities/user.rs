//! Authenticated user identity.

use std::fmt;

/// Opaque identifier of the user a request is attributed to.
///
/// Placed into request extensions by the authentication layer and read back
/// by [`crate::api::middleware::auth::AuthenticatedUser`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
