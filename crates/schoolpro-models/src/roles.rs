//! User roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Role of a [`crate::users::User`], stored as the Postgres enum `user_role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Teacher,
    Student,
    Parent,
    Secretary,
    Librarian,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::Teacher => "TEACHER",
            Self::Student => "STUDENT",
            Self::Parent => "PARENT",
            Self::Secretary => "SECRETARY",
            Self::Librarian => "LIBRARIAN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_matches_as_str() {
        for role in [
            UserRole::SuperAdmin,
            UserRole::Admin,
            UserRole::Teacher,
            UserRole::Student,
            UserRole::Parent,
            UserRole::Secretary,
            UserRole::Librarian,
        ] {
            assert_eq!(
                serde_json::to_value(role).unwrap(),
                serde_json::json!(role.as_str())
            );
        }
    }

    #[test]
    fn test_deserialize_role() {
        let role: UserRole = serde_json::from_str("\"SUPER_ADMIN\"").unwrap();
        assert_eq!(role, UserRole::SuperAdmin);
        assert!(serde_json::from_str::<UserRole>("\"teacher\"").is_err());
    }
}
