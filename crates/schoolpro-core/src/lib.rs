//! # SchoolPro Core
//!
//! Core types, errors, and utilities for the SchoolPro API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`response`]: The `{ data, error }` JSON envelope
//! - [`password`]: bcrypt password hashing and verification
//! - [`slug`]: Slug generation for classes, sections, subjects and schools
//! - [`dates`]: Lenient date parsing for profile payloads
//! - [`serde`]: Lenient deserializers for form-sourced numbers
//!
//! # Example
//!
//! ```ignore
//! use schoolpro_core::{AppError, generate_slug, hash_password_with_cost, USER_HASH_COST};
//!
//! let slug = generate_slug("Grade 10!")?; // "grade-10"
//! let hash = hash_password_with_cost("secret", USER_HASH_COST)?;
//! let error = AppError::conflict(anyhow::anyhow!("Class Already Exists"));
//! ```

pub mod dates;
pub mod errors;
pub mod password;
pub mod response;
pub mod serde;
pub mod slug;

pub use dates::{parse_date, parse_optional_date};
pub use errors::AppError;
pub use password::{
    PROFILE_HASH_COST, USER_HASH_COST, hash_password_with_cost, verify_password,
};
pub use response::ApiResponse;
pub use slug::generate_slug;
