//! # SchoolPro Auth
//!
//! Token claims and JWT utilities for the SchoolPro API.
//!
//! A successful login yields two HS256 tokens built from the same
//! payload (user id, email, role):
//!
//! - **Access token** ([`Claims`]): short-lived, lifetime `JWT_ACCESS_EXPIRY`
//! - **Refresh token** ([`RefreshTokenClaims`]): long-lived, carries a unique `jti`
//!
//! # Example
//!
//! ```ignore
//! use schoolpro_auth::{TokenPayload, create_access_token, verify_token};
//! use schoolpro_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let payload = TokenPayload::new(user_id, "user@example.com", "TEACHER");
//! let token = create_access_token(&payload, &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{Claims, RefreshTokenClaims, TokenPayload};
pub use jwt::{create_access_token, create_refresh_token, verify_refresh_token, verify_token};
