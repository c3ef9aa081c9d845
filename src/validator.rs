//! Extractors that deserialize and validate request input.
//!
//! Both reject with `400 Bad Request` and a `{"error": ...}` body, whether
//! the input is malformed, incomplete, or fails a `validator` rule.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use recipes_core::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Pulls the field name out of serde's "missing field `x`" message.
fn missing_field(message: &str) -> Option<&str> {
    message
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if let Some(field) = missing_field(&error_msg) {
                    return AppError::bad_request(anyhow!("{} is required", field));
                }

                if error_msg.contains("invalid type") {
                    return AppError::bad_request(anyhow!("Invalid field type in request"));
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow!(
                        "Missing 'Content-Type: application/json' header"
                    ));
                }

                AppError::bad_request(anyhow!("Invalid request body"))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                match missing_field(&error_msg) {
                    Some(field) => AppError::bad_request(anyhow!("{} is required", field)),
                    None => AppError::bad_request(anyhow!("Invalid query string")),
                }
            })?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "tag must be at least 3 characters long"))]
        tag: String,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_format_errors_uses_message_or_field() {
        let sample = Sample {
            tag: "ab".into(),
            name: String::new(),
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(
            format_errors(&errors),
            "name is invalid, tag must be at least 3 characters long"
        );
    }

    #[test]
    fn test_missing_field_extraction() {
        assert_eq!(
            missing_field("Failed to deserialize: missing field `tags` at line 1"),
            Some("tags")
        );
        assert_eq!(missing_field("expected value at line 1"), None);
    }
}
