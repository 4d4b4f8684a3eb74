//! User data models and DTOs.
//!
//! Re-exports user models from the `schoolpro-models` crate.

pub use schoolpro_models::users::*;
