pub use schoolpro_models::schools::*;
