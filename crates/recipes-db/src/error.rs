//! Store-level errors and their HTTP mapping.

use recipes_core::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier is not a 24-character hex ObjectId.
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(_) => AppError::bad_request(err),
            StoreError::NotFound(_) => AppError::not_found(err),
            StoreError::Duplicate(_) => AppError::conflict(err),
            StoreError::Database(_) | StoreError::Serialization(_) => AppError::database(err),
        }
    }
}
