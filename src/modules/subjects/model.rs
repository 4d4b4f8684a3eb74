pub use schoolpro_models::analytics::BriefItem;
pub use schoolpro_models::subjects::*;
