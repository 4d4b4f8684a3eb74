use anyhow::anyhow;
use chrono::{Duration, Utc};
use schoolpro_auth::{TokenPayload, create_access_token, create_refresh_token};
use schoolpro_config::{JwtConfig, jwt::REFRESH_TOKEN_TTL_SECS};
use schoolpro_core::{AppError, verify_password};
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};

use crate::modules::users::model::{USER_COLUMNS, User};

use super::model::{LoginRequest, LoginResponse, RefreshToken};

#[derive(sqlx::FromRow)]
struct UserWithPassword {
    #[sqlx(flatten)]
    user: User,
    password: String,
}

pub struct AuthService;

impl AuthService {
    /// Checks credentials, issues both tokens and records the refresh token.
    ///
    /// An unknown email answers 409 and a wrong password 401; existing
    /// clients depend on the difference.
    #[instrument(skip(db, dto, jwt_config), fields(user.email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let query = format!("SELECT {USER_COLUMNS}, password FROM users WHERE email = $1");
        let UserWithPassword { user, password } = sqlx::query_as::<_, UserWithPassword>(&query)
            .bind(&dto.email)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| {
                debug!("Login attempt for unknown email");
                AppError::conflict(anyhow!("Invalid Credentials"))
            })?;

        if !verify_password(&dto.password, &password)? {
            warn!(user.id = %user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized("Invalid credentials".to_string()));
        }

        let payload = TokenPayload::new(user.id.into_inner(), &user.email, user.role.as_str());
        let access_token = create_access_token(&payload, jwt_config)?;
        let refresh_token = create_refresh_token(&payload, jwt_config)?;

        Self::store_refresh_token(db, &user, &refresh_token).await?;

        info!(user.id = %user.id, "User logged in");

        Ok(LoginResponse {
            user,
            access_token,
            refresh_token,
        })
    }

    #[instrument(skip(db, user, token), fields(user.id = %user.id, db.operation = "INSERT", db.table = "refresh_tokens"))]
    async fn store_refresh_token(
        db: &PgPool,
        user: &User,
        token: &str,
    ) -> Result<RefreshToken, AppError> {
        let expires_at = Utc::now() + Duration::seconds(REFRESH_TOKEN_TTL_SECS);

        let stored = sqlx::query_as::<_, RefreshToken>(
            "INSERT INTO refresh_tokens (token, user_id, expires_at)
             VALUES ($1, $2, $3)
             RETURNING id, token, user_id, expires_at, created_at",
        )
        .bind(token)
        .bind(user.id)
        .bind(expires_at)
        .fetch_one(db)
        .await?;

        Ok(stored)
    }
}
