//! User account creation.

use validator::Validate;

use recipes_core::hash_password;
use recipes_db::UserStore;
use recipes_models::{CredentialsRequest, User};

/// Creates a user with a bcrypt-hashed password.
///
/// Fails if the credentials don't pass request validation or the username is
/// already taken.
pub async fn create_user(
    store: &dyn UserStore,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    let credentials = CredentialsRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    credentials.validate()?;

    let password_hash = hash_password(password).map_err(|e| e.error)?;

    store
        .insert(User {
            username: credentials.username,
            password_hash,
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipes_core::verify_password;
    use recipes_db::InMemoryUserStore;

    #[tokio::test]
    async fn test_create_user_stores_hash() {
        let store = InMemoryUserStore::new();
        create_user(&store, "chef", "s3cret-pass").await.unwrap();

        let user = store.find_by_username("chef").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "s3cret-pass");
        assert!(verify_password("s3cret-pass", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_create_duplicate_user_fails() {
        let store = InMemoryUserStore::new();
        create_user(&store, "chef", "one").await.unwrap();

        let err = create_user(&store, "chef", "two").await.unwrap_err();
        assert!(err.to_string().contains("already taken"));
    }

    #[tokio::test]
    async fn test_empty_username_rejected() {
        let store = InMemoryUserStore::new();
        assert!(create_user(&store, "", "pw").await.is_err());
    }
}
