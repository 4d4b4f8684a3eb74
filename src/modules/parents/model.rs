pub use schoolpro_models::parents::*;
