//! Request validation seam.
//!
//! Constraints are declared as an explicit `Validate` impl on each request
//! type, and `ValidatedJson` runs them right after deserialization. Handlers
//! therefore only ever see well-formed payloads; everything else surfaces as
//! an `INVALID_INPUT_VALUE` response before the handler body runs.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ErrorCode, FieldError};

/// Field-level validation for request payloads.
pub trait Validate {
    /// Returns one entry per violated field, in rule declaration order.
    /// An empty vec means the payload is acceptable.
    fn validate(&self) -> Vec<FieldError>;
}

/// JSON extractor that validates the payload before the handler runs.
///
/// Undecodable bodies and constraint violations both map to
/// `INVALID_INPUT_VALUE`; only constraint violations carry field entries.
/// The decode error itself is logged, never returned to the client.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejecting undecodable request body");
                ApiError::code(ErrorCode::InvalidInputValue)
            })?;

        let violations = payload.validate();
        if violations.is_empty() {
            Ok(Self(payload))
        } else {
            Err(ApiError::Validation(violations))
        }
    }
}

/// A value is blank when it is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Shape check only: one `@` with non-empty local part and a dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("a"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("hong@example.com"));
        assert!(is_valid_email("a.b+tag@mail.example.org"));

        assert!(!is_valid_email("not-email-format"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com")); // empty local part
        assert!(!is_valid_email("hong@")); // empty domain
        assert!(!is_valid_email("hong@example")); // no dot in domain
        assert!(!is_valid_email("hong@.com")); // empty host
        assert!(!is_valid_email("hong@example.")); // empty tld
        assert!(!is_valid_email("ho ng@example.com")); // whitespace
        assert!(!is_valid_email("hong@ex@ample.com")); // second '@'
    }
}
