//! Token creation and verification.
//!
//! Both token kinds are signed with the same HS256 secret from
//! [`JwtConfig`]; only their lifetimes and claim shapes differ.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use schoolpro_config::JwtConfig;
use schoolpro_core::AppError;

use crate::claims::{Claims, RefreshTokenClaims, TokenPayload};

/// Creates a short-lived access token.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    payload: &TokenPayload,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: payload.user_id.to_string(),
        email: payload.email.clone(),
        role: payload.role.clone(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error for a bad signature, an expired token or
/// malformed input.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}

/// Creates a long-lived refresh token.
///
/// The caller is responsible for persisting it; this crate has no storage.
pub fn create_refresh_token(
    payload: &TokenPayload,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.refresh_token_expiry as usize;

    let claims = RefreshTokenClaims {
        sub: payload.user_id.to_string(),
        email: payload.email.clone(),
        role: payload.role.clone(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create refresh token: {}", e)))
}

pub fn verify_refresh_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<RefreshTokenClaims, AppError> {
    decode::<RefreshTokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired refresh token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 2_592_000,
        }
    }

    fn payload() -> TokenPayload {
        TokenPayload::new(Uuid::new_v4(), "test@example.com", "TEACHER")
    }

    #[test]
    fn test_access_token_round_trip_keeps_payload() {
        let config = get_test_jwt_config();
        let payload = payload();

        let token = create_access_token(&payload, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, payload.user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.role, "TEACHER");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_refresh_token_outlives_access_token() {
        let config = get_test_jwt_config();
        let payload = payload();

        let token = create_refresh_token(&payload, &config).unwrap();
        let claims = verify_refresh_token(&token, &config).unwrap();

        assert_eq!(claims.exp - claims.iat, 2_592_000);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_refresh_tokens_are_unique() {
        let config = get_test_jwt_config();
        let payload = payload();

        let first = create_refresh_token(&payload, &config).unwrap();
        let second = create_refresh_token(&payload, &config).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token(&payload(), &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            ..get_test_jwt_config()
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let err = verify_token("invalid-token", &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }
}
