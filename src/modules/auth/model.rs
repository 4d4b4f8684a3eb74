//! Authentication models.
//!
//! Re-exports auth models from the `schoolpro-models` crate.

pub use schoolpro_models::auth::*;
