//! Admin account creation.

use schoolpro_core::{USER_HASH_COST, hash_password_with_cost};
use schoolpro_models::ids::{SchoolId, UserId};
use schoolpro_models::roles::UserRole;
use sqlx::PgPool;

/// Creates an `ADMIN` user, optionally bound to a school.
///
/// Fails if the email is taken or the school does not exist.
pub async fn create_admin(
    db: &PgPool,
    name: &str,
    email: &str,
    password: &str,
    school_id: Option<SchoolId>,
) -> Result<UserId, Box<dyn std::error::Error>> {
    let hashed_password = hash_password_with_cost(password, USER_HASH_COST)
        .map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let mut tx = db.begin().await?;

    let school_name = match school_id {
        Some(school_id) => {
            let name = sqlx::query_scalar::<_, String>("SELECT name FROM schools WHERE id = $1")
                .bind(school_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| format!("School {} not found", school_id))?;
            Some(name)
        }
        None => None,
    };

    let user_id = sqlx::query_scalar::<_, UserId>(
        "INSERT INTO users (email, password, role, name, school_id, school_name)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(email)
    .bind(&hashed_password)
    .bind(UserRole::Admin)
    .bind(name)
    .bind(school_id)
    .bind(&school_name)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(user_id) = user_id else {
        tx.rollback().await?;
        return Err("User with this email already exists".into());
    };

    tx.commit().await?;

    Ok(user_id)
}
