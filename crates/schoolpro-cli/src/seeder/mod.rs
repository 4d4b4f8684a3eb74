//! Database seeding.
//!
//! Generates fake schools with a complete academic structure.

pub mod academics;
pub mod models;
pub mod schools;

pub use models::{AcademicsPerSchool, SeedConfig};

use sqlx::PgPool;
use std::time::Instant;

/// Seeds schools and their classes, sections, departments and subjects.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🌱 Starting database seeding...");

    let schools = schools::seed_schools(db, config.num_schools).await?;
    academics::seed_academics(db, &schools, &config.academics).await?;

    println!("✨ Seeding completed in {:?}", start_time.elapsed());
    Ok(())
}

/// Removes everything [`seed_all`] created.
pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    schools::clear_schools(db).await?;
    Ok(())
}
