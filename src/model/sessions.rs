use serde::{Deserialize, Serialize};

use super::UserId;

/// Signed, stateless session credential handed to clients after login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Identity claims embedded in a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub identity: Identity,
    /// Expiration as seconds since the Unix epoch.
    pub exp: u64,
}
