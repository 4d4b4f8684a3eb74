//! School seeding functionality.
//!
//! Seeded schools carry a `seed-` slug prefix so they can be cleared
//! without touching schools registered through the API.

use fake::Fake;
use fake::faker::address::en::CityName;
use schoolpro_core::generate_slug;
use schoolpro_models::ids::SchoolId;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::SchoolSeed;

pub const SEED_SLUG_PREFIX: &str = "seed-";

const SCHOOL_KINDS: [&str; 4] = ["Academy", "College", "High School", "Grammar School"];

/// Generates school data. Slugs embed the index so they stay unique even
/// when the faker repeats a city name.
pub fn generate_schools(count: usize) -> Vec<SchoolSeed> {
    (0..count)
        .map(|i| {
            let city: String = CityName().fake();
            let name = format!("{} {}", city, SCHOOL_KINDS[i % SCHOOL_KINDS.len()]);
            let slug = generate_slug(&name).unwrap_or_else(|_| "school".to_string());

            SchoolSeed {
                slug: format!("{}{}-{}", SEED_SLUG_PREFIX, slug, i + 1),
                name,
            }
        })
        .collect()
}

/// Seeds schools into the database
pub async fn seed_schools(
    db: &PgPool,
    count: usize,
) -> Result<Vec<(SchoolId, String)>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📚 Seeding {} schools...", count);

    let schools = generate_schools(count);
    let mut tx = db.begin().await?;
    let ids = insert_schools_chunk(&mut tx, &schools).await?;
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} schools in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids
        .into_iter()
        .zip(schools.into_iter().map(|s| s.slug))
        .collect())
}

async fn insert_schools_chunk(
    tx: &mut Transaction<'_, Postgres>,
    schools: &[SchoolSeed],
) -> Result<Vec<SchoolId>, Box<dyn std::error::Error>> {
    if schools.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO schools (name, slug) VALUES ");

    for i in 0..schools.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 2;
        query.push_str(&format!("(${}, ${})", param_idx + 1, param_idx + 2));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar::<_, SchoolId>(&query);
    for school in schools {
        q = q.bind(&school.name).bind(&school.slug);
    }

    let ids = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Clears seeded schools. Their classes, sections, departments and subjects
/// go with them through `ON DELETE CASCADE`.
pub async fn clear_schools(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded schools...");

    let result = sqlx::query("DELETE FROM schools WHERE slug LIKE $1")
        .bind(format!("{}%", SEED_SLUG_PREFIX))
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} schools in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_schools_have_unique_prefixed_slugs() {
        let schools = generate_schools(25);

        assert_eq!(schools.len(), 25);
        assert!(schools.iter().all(|s| s.slug.starts_with(SEED_SLUG_PREFIX)));

        let slugs: HashSet<_> = schools.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs.len(), 25);
    }

    #[test]
    fn test_generate_schools_zero() {
        assert!(generate_schools(0).is_empty());
    }
}
