use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expiration_seconds: i64,
    /// Value written to and required in the `iss` claim.
    pub issuer: String,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            expiration_seconds: env::var("JWT_EXPIRATION_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(600), // 10 minutes
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "recipes-api".to_string()),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "your-secret-key-change-in-production".to_string(),
            expiration_seconds: 600,
            issuer: "recipes-api".to_string(),
        }
    }
}
