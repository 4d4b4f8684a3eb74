//! Student data models and DTOs.
//!
//! Re-exports student models from the `schoolpro-models` crate.

pub use schoolpro_models::students::*;
