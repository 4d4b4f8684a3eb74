//! Password hashing with bcrypt.
//!
//! Two work factors are in use: generic User identity rows are hashed with
//! [`USER_HASH_COST`], role-specific profile rows (students, teachers,
//! parents) with [`PROFILE_HASH_COST`].

use bcrypt::{hash, verify};

use crate::errors::AppError;

/// bcrypt cost for `users.password`.
pub const USER_HASH_COST: u32 = 12;

/// bcrypt cost for the password copy kept on profile rows.
pub const PROFILE_HASH_COST: u32 = 10;

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal_error(format!("Failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password_with_cost("correctpassword", PROFILE_HASH_COST).unwrap();

        assert_ne!(hash, "correctpassword");
        assert!(verify_password("correctpassword", &hash).unwrap());
        assert!(!verify_password("wrongpassword", &hash).unwrap());
    }

    #[test]
    fn test_cost_is_encoded_in_hash() {
        let user_hash = hash_password_with_cost("pw", USER_HASH_COST).unwrap();
        let profile_hash = hash_password_with_cost("pw", PROFILE_HASH_COST).unwrap();

        assert!(user_hash.starts_with("$2b$12$"));
        assert!(profile_hash.starts_with("$2b$10$"));
    }

    #[test]
    fn test_hash_generates_unique_hashes() {
        let hash1 = hash_password_with_cost("samepassword", PROFILE_HASH_COST).unwrap();
        let hash2 = hash_password_with_cost("samepassword", PROFILE_HASH_COST).unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        let result = verify_password("testpassword", "not_a_valid_bcrypt_hash");
        assert!(result.is_err());
    }
}
