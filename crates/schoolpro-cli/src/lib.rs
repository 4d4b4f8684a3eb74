//! # SchoolPro CLI
//!
//! Administrative commands and database seeding for SchoolPro.
//!
//! ## Usage
//!
//! ```ignore
//! use schoolpro_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(3); // 3 schools with default academic structure
//! seed_all(&pool, config).await?;
//! ```

pub mod admin;
pub mod seeder;
