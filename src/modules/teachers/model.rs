//! Teacher data models and DTOs.
//!
//! Re-exports teacher and allocation models from the `schoolpro-models` crate.

pub use schoolpro_models::teachers::*;
