//! User store adapters.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use tokio::sync::RwLock;
use tracing::instrument;

use recipes_models::User;

use crate::error::StoreError;
use crate::mongo::{Database, USERS_COLLECTION};

/// MongoDB server code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Inserts a user; `Duplicate` when the username is already taken.
    async fn insert(&self, user: User) -> Result<(), StoreError>;
}

fn username_taken(username: &str) -> StoreError {
    StoreError::Duplicate(format!("Username '{username}' is already taken"))
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .collection
            .find_one(doc! { "username": username })
            .await?)
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn insert(&self, user: User) -> Result<(), StoreError> {
        match self.collection.insert_one(&user).await {
            Ok(_) => Ok(()),
            Err(err) if is_duplicate_key(&err) => Err(username_taken(&user.username)),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(username_taken(&user.username));
        }

        users.insert(user.username.clone(), user);
        Ok(())
    }
}
