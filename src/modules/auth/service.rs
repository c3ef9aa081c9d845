use anyhow::anyhow;
use tracing::{info, instrument, warn};

use recipes_auth::{create_token, refresh_token};
use recipes_config::JwtConfig;
use recipes_core::{AppError, hash_password, verify_dummy_password, verify_password};
use recipes_db::UserStore;
use recipes_models::{CredentialsRequest, TokenResponse, User, UserResponse};
use recipes_observability::{
    track_jwt_issued, track_user_created, track_user_login_failure, track_user_login_success,
};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(users, dto), fields(username = %dto.username))]
    pub async fn sign_up(
        users: &dyn UserStore,
        dto: CredentialsRequest,
    ) -> Result<UserResponse, AppError> {
        if users.find_by_username(&dto.username).await?.is_some() {
            return Err(AppError::conflict(anyhow!(
                "Username '{}' is already taken",
                dto.username
            )));
        }

        let user = User {
            username: dto.username,
            password_hash: hash_password(&dto.password)?,
        };

        // The unique index still catches a concurrent sign-up with the same name.
        users.insert(user.clone()).await?;
        track_user_created();

        info!("User registered");
        Ok(user.into())
    }

    /// Unknown users and wrong passwords produce the same error, and both
    /// cost one bcrypt verification.
    #[instrument(skip(users, dto, jwt_config), fields(username = %dto.username))]
    pub async fn sign_in(
        users: &dyn UserStore,
        dto: CredentialsRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let Some(user) = users.find_by_username(&dto.username).await? else {
            verify_dummy_password(&dto.password);
            warn!("Sign-in for unknown user");
            track_user_login_failure("unknown_user");
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        };

        if !verify_password(&dto.password, &user.password_hash)? {
            warn!("Sign-in with wrong password");
            track_user_login_failure("wrong_password");
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        }

        let issued = create_token(&user.username, jwt_config)?;
        track_jwt_issued();
        track_user_login_success();

        info!("User signed in");
        Ok(TokenResponse {
            token: issued.token,
            expires: issued.expires_at,
        })
    }

    #[instrument(skip_all)]
    pub fn refresh(token: &str, jwt_config: &JwtConfig) -> Result<TokenResponse, AppError> {
        let issued = refresh_token(token, jwt_config)?;
        track_jwt_issued();

        Ok(TokenResponse {
            token: issued.token,
            expires: issued.expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipes_db::InMemoryUserStore;

    fn credentials(username: &str, password: &str) -> CredentialsRequest {
        CredentialsRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_stores_hash_not_password() {
        let users = InMemoryUserStore::new();

        let created = AuthService::sign_up(&users, credentials("chef", "pa55word"))
            .await
            .unwrap();
        assert_eq!(created.username, "chef");

        let stored = users.find_by_username("chef").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "pa55word");
        assert!(verify_password("pa55word", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_is_conflict() {
        let users = InMemoryUserStore::new();
        AuthService::sign_up(&users, credentials("chef", "one"))
            .await
            .unwrap();

        let err = AuthService::sign_up(&users, credentials("chef", "two"))
            .await
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 409);
    }

    #[tokio::test]
    async fn test_sign_in_failures_are_indistinguishable() {
        let users = InMemoryUserStore::new();
        let jwt_config = JwtConfig::default();
        AuthService::sign_up(&users, credentials("chef", "right"))
            .await
            .unwrap();

        let unknown = AuthService::sign_in(&users, credentials("ghost", "right"), &jwt_config)
            .await
            .unwrap_err();
        let wrong = AuthService::sign_in(&users, credentials("chef", "wrong"), &jwt_config)
            .await
            .unwrap_err();

        assert_eq!(unknown.status, wrong.status);
        assert_eq!(unknown.error.to_string(), wrong.error.to_string());
    }

    #[tokio::test]
    async fn test_unknown_user_sign_in_costs_a_hash_check() {
        let users = InMemoryUserStore::new();
        let jwt_config = JwtConfig::default();

        // Warm the lazily built dummy hash so only the check itself is timed.
        verify_dummy_password("warm-up");

        let baseline = std::time::Instant::now();
        verify_dummy_password("ghost-password");
        let one_check = baseline.elapsed();

        let start = std::time::Instant::now();
        let err = AuthService::sign_in(&users, credentials("ghost", "ghost-password"), &jwt_config)
            .await
            .unwrap_err();
        let elapsed = start.elapsed();

        assert_eq!(err.status.as_u16(), 401);
        assert!(elapsed >= one_check / 2);
    }

    #[tokio::test]
    async fn test_sign_in_then_refresh() {
        let users = InMemoryUserStore::new();
        let jwt_config = JwtConfig::default();
        AuthService::sign_up(&users, credentials("chef", "right"))
            .await
            .unwrap();

        let signed_in = AuthService::sign_in(&users, credentials("chef", "right"), &jwt_config)
            .await
            .unwrap();
        let refreshed = AuthService::refresh(&signed_in.token, &jwt_config).unwrap();

        assert!(!refreshed.token.is_empty());
        assert!(refreshed.expires >= signed_in.expires);
    }
}
