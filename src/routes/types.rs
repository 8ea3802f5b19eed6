//! Request/response types for the user API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::FieldError;
use crate::users::User;
use crate::validation::{Validate, is_blank, is_valid_email};

// Fields default to empty on deserialization so a missing field is reported
// as a blank-field violation rather than a decode failure.
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name. Must not be blank.
    #[serde(default)]
    pub name: String,
    /// Email address. Must not be blank and must look like an address.
    #[serde(default)]
    pub email: String,
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(FieldError {
                field: "name".to_string(),
                reason: "이름은 필수입니다.".to_string(),
            });
        }

        // A blank email reports only the blank reason, not the format one.
        if is_blank(&self.email) {
            errors.push(FieldError {
                field: "email".to_string(),
                reason: "이메일은 필수입니다.".to_string(),
            });
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: "email".to_string(),
                reason: "이메일 형식이 아닙니다.".to_string(),
            });
        }

        errors
    }
}

#[derive(Serialize, ToSchema)]
pub struct ListUsersResponse {
    /// All users in id order.
    pub users: Vec<User>,
    /// Number of users returned.
    pub count: usize,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server status ("ok").
    pub status: String,
    /// Server version.
    pub version: String,
    /// Server uptime in seconds.
    pub uptime_seconds: u64,
    /// Number of registered users.
    pub users: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("홍길동", "hong@example.com").validate().is_empty());
    }

    #[test]
    fn test_bad_email_format_reports_single_violation() {
        let errors = request("홍길동", "not-email-format").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].reason, "이메일 형식이 아닙니다.");
    }

    #[test]
    fn test_blank_email_reports_required_only() {
        let errors = request("홍길동", "").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].reason, "이메일은 필수입니다.");

        // Whitespace-only counts as blank too.
        let errors = request("홍길동", "   ").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].reason, "이메일은 필수입니다.");
    }

    #[test]
    fn test_every_violated_field_is_reported() {
        let errors = request("", "not-email-format").validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].reason, "이름은 필수입니다.");
        assert_eq!(errors[1].field, "email");
        assert_eq!(errors[1].reason, "이메일 형식이 아닙니다.");
    }
}
