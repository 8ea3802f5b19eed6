//! Error types for the API layer.
//!
//! Every failure a handler can produce flows through `ApiError`, whose
//! `IntoResponse` impl is the single place response shape is decided. The
//! JSON body always carries a symbolic code and a message; validation
//! failures additionally carry per-field entries.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Error code registry
// ---------------------------------------------------------------------------

/// Closed set of application error conditions.
///
/// Each code is pinned to exactly one HTTP status and one default message.
/// Clients match on the symbolic name, never on the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request payload failed validation or could not be decoded.
    InvalidInputValue,
    /// No user with the requested id.
    UserNotFound,
    /// Email address is already registered.
    EmailDuplication,
    /// Unhandled fault; detail stays in the server logs.
    InternalServerError,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidInputValue => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::EmailDuplication => StatusCode::CONFLICT,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Default client-facing message.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidInputValue => "잘못된 입력값입니다.",
            Self::UserNotFound => "존재하지 않는 회원입니다.",
            Self::EmailDuplication => "이미 사용 중인 이메일입니다.",
            Self::InternalServerError => "서버 내부 에러입니다.",
        }
    }

    /// Symbolic name for API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInputValue => "INVALID_INPUT_VALUE",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::EmailDuplication => "EMAIL_DUPLICATION",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// API error
// ---------------------------------------------------------------------------

/// API error raised by handlers and the validation layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request payload violated declared field constraints.
    #[error("invalid input value")]
    Validation(Vec<FieldError>),

    /// Expected business-rule violation, pre-classified by its code.
    #[error("{message}")]
    App {
        /// The code deciding status and symbolic name.
        code: ErrorCode,
        /// Message for the client, the code's default unless overridden.
        message: String,
    },

    /// Anything the application did not anticipate.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ApiError {
    /// Application error with the code's default message.
    pub fn code(code: ErrorCode) -> Self {
        Self::App {
            code,
            message: code.message().to_string(),
        }
    }

    /// Application error with an overridden message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::App {
            code,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// HTTP response conversion
// ---------------------------------------------------------------------------

/// One failed input constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending request field.
    pub field: String,
    /// The violated constraint's configured message.
    pub reason: String,
}

/// JSON body shared by every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Symbolic error code (e.g. "USER_NOT_FOUND").
    pub code: String,
    /// Human-readable message for the client.
    pub message: String,
    /// Per-field violations. Present only for validation failures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, message, errors) = match self {
            ApiError::Validation(errors) => {
                tracing::debug!(violations = errors.len(), "request failed validation");
                let code = ErrorCode::InvalidInputValue;
                (code, code.message().to_string(), errors)
            }
            ApiError::App { code, message } => {
                tracing::warn!(code = code.as_str(), %message, "application error");
                (code, message, Vec::new())
            }
            ApiError::Unexpected(err) => {
                tracing::error!(error = ?err, "unexpected error");
                let code = ErrorCode::InternalServerError;
                (code, code.message().to_string(), Vec::new())
            }
        };

        let body = ErrorResponse {
            code: code.as_str().to_string(),
            message,
            errors,
        };

        (code.status(), axum::Json(body)).into_response()
    }
}

/// Maps a handler panic to the same body as an unexpected error.
///
/// Registered on the router via `CatchPanicLayer`, so faults that never
/// become an `ApiError` value still produce the uniform 500 response.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(%detail, "handler panicked");

    let code = ErrorCode::InternalServerError;
    let body = ErrorResponse {
        code: code.as_str().to_string(),
        message: code.message().to_string(),
        errors: Vec::new(),
    };
    (code.status(), axum::Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_metadata() {
        assert_eq!(ErrorCode::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::UserNotFound.as_str(), "USER_NOT_FOUND");
        assert_eq!(ErrorCode::UserNotFound.message(), "존재하지 않는 회원입니다.");

        assert_eq!(ErrorCode::InvalidInputValue.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::EmailDuplication.status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::InternalServerError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_message_defaults_to_code() {
        let err = ApiError::code(ErrorCode::UserNotFound);
        assert_eq!(err.to_string(), "존재하지 않는 회원입니다.");

        let err = ApiError::with_message(ErrorCode::UserNotFound, "회원 7을 찾을 수 없습니다.");
        assert_eq!(err.to_string(), "회원 7을 찾을 수 없습니다.");
    }

    #[test]
    fn test_opaque_errors_convert() {
        let err = ApiError::from(anyhow::anyhow!("connection reset"));
        assert!(matches!(err, ApiError::Unexpected(_)));
    }
}
