//! User identity records.
//!
//! Every person in the system has exactly one `User` row. Students,
//! teachers and parents additionally have a profile row that points back
//! to it through `user_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{SchoolId, UserId};
use crate::roles::UserRole;

/// A user as returned by the API. The password hash is never selected
/// into this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
    pub name: String,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub school_id: Option<SchoolId>,
    pub school_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Columns selected for [`User`].
pub const USER_COLUMNS: &str =
    "id, email, role, name, phone, image, school_id, school_name, created_at, updated_at";

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub role: UserRole,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub school_id: Option<SchoolId>,
    pub school_name: Option<String>,
}
