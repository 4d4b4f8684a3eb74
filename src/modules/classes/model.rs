//! Class and section models.
//!
//! Re-exports class models from the `schoolpro-models` crate.

pub use schoolpro_models::classes::*;
