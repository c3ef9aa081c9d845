//! JWT claim structure for bearer tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in every bearer token.
///
/// # Fields
///
/// - `sub`: Username of the token holder
/// - `iss`: Issuer, checked on verification
/// - `iat`: Issued-at timestamp (Unix seconds)
/// - `exp`: Expiration timestamp (Unix seconds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Whether the token is still usable at `now` (Unix seconds).
    pub fn is_valid_at(&self, now: i64) -> bool {
        now < self.exp
    }
}
