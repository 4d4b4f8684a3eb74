//! Login request/response and persisted refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::ids::UserId;
use crate::users::User;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Not checked for email shape; an unknown value answers 409 like any
    /// other unknown email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// A refresh token issued at login. Rows are only ever inserted.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshToken {
    pub id: Uuid,
    pub token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_accepts_any_non_empty_email() {
        let dto: LoginRequest = serde_json::from_value(serde_json::json!({
            "email": "not-an-email",
            "password": "secret123"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());

        let empty = LoginRequest {
            email: String::new(),
            password: "secret123".to_string(),
        };
        assert!(empty.validate().is_err());
    }
}
