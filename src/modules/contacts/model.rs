pub use schoolpro_models::contacts::*;
