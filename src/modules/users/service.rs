use anyhow::anyhow;
use schoolpro_core::{AppError, USER_HASH_COST, hash_password_with_cost};
use schoolpro_db::is_unique_violation;
use sqlx::PgConnection;
use tracing::{debug, error, info, instrument, warn};

use super::model::{CreateUserDto, USER_COLUMNS, User};

/// Message returned when a profile's user account could not be created for
/// a reason the client cannot act on.
pub const ACCOUNT_CREATION_FAILED: &str = "Failed to create user account";

pub struct UserService;

impl UserService {
    /// Inserts a user row. Takes a connection so callers can run it inside
    /// the transaction that also writes the profile.
    #[instrument(skip(conn, dto), fields(user.email = %dto.email, db.operation = "INSERT", db.table = "users"))]
    pub async fn create_user(conn: &mut PgConnection, dto: CreateUserDto) -> Result<User, AppError> {
        let email_taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(&dto.email)
                .fetch_one(&mut *conn)
                .await?;

        if email_taken {
            warn!(user.email = %dto.email, "Attempted to create user with existing email");
            return Err(AppError::conflict(anyhow!("Email Already Exists")));
        }

        let password_hash = hash_password_with_cost(&dto.password, USER_HASH_COST)?;

        let query = format!(
            "INSERT INTO users (email, password, role, name, phone, image, school_id, school_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(&dto.email)
            .bind(&password_hash)
            .bind(dto.role)
            .bind(&dto.name)
            .bind(&dto.phone)
            .bind(&dto.image)
            .bind(dto.school_id)
            .bind(&dto.school_name)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return AppError::conflict(anyhow!("Email Already Exists"));
                }
                error!(error = %e, "Database error creating user");
                AppError::from(e)
            })?;

        info!(user.id = %user.id, user.role = %user.role, "User created successfully");

        Ok(user)
    }

    /// Creates the account behind a student, teacher or parent profile.
    ///
    /// Any failure is reported to the caller as 400: client errors keep their
    /// message, server errors are logged and replaced by
    /// [`ACCOUNT_CREATION_FAILED`].
    pub async fn create_profile_user(
        conn: &mut PgConnection,
        dto: CreateUserDto,
    ) -> Result<User, AppError> {
        Self::create_user(conn, dto).await.map_err(nested_user_error)
    }
}

pub fn nested_user_error(err: AppError) -> AppError {
    if err.status.is_server_error() {
        error!(error = ?err.error, "Nested user creation failed");
        AppError::bad_request(anyhow!(ACCOUNT_CREATION_FAILED))
    } else {
        debug!(status = %err.status, error = %err.error, "Nested user creation rejected");
        AppError::bad_request(err.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_nested_conflict_becomes_bad_request_with_message() {
        let err = nested_user_error(AppError::conflict(anyhow!("Email Already Exists")));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "Email Already Exists");
    }

    #[test]
    fn test_nested_server_error_is_masked() {
        let err = nested_user_error(AppError::internal_error("pool timed out".to_string()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), ACCOUNT_CREATION_FAILED);
    }
}
