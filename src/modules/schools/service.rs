use anyhow::anyhow;
use schoolpro_core::{AppError, generate_slug};
use schoolpro_db::is_unique_violation;
use schoolpro_models::ids::SchoolId;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};

use super::model::{CreateSchoolDto, SCHOOL_COLUMNS, School};

pub struct SchoolService;

impl SchoolService {
    #[instrument(skip(db, dto), fields(school.name = %dto.name, db.operation = "INSERT", db.table = "schools"))]
    pub async fn create_school(db: &PgPool, dto: CreateSchoolDto) -> Result<School, AppError> {
        let slug = generate_slug(&dto.name)?;
        debug!(school.slug = %slug, "Creating new school");

        let query = format!(
            "INSERT INTO schools (name, slug, logo) VALUES ($1, $2, $3) RETURNING {SCHOOL_COLUMNS}"
        );

        let school = sqlx::query_as::<_, School>(&query)
            .bind(&dto.name)
            .bind(&slug)
            .bind(&dto.logo)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    warn!(school.slug = %slug, "Attempted to create school with existing slug");
                    return AppError::conflict(anyhow!("School Already Exists"));
                }
                error!(error = %e, "Database error creating school");
                AppError::from(e)
            })?;

        info!(school.id = %school.id, school.slug = %school.slug, "School created successfully");

        Ok(school)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "schools"))]
    pub async fn get_all_schools(db: &PgPool) -> Result<Vec<School>, AppError> {
        let query = format!("SELECT {SCHOOL_COLUMNS} FROM schools ORDER BY created_at DESC");
        let schools = sqlx::query_as::<_, School>(&query).fetch_all(db).await?;
        Ok(schools)
    }

    #[instrument(skip(db), fields(school.id = %school_id, db.operation = "SELECT", db.table = "schools"))]
    pub async fn get_school_by_id(db: &PgPool, school_id: SchoolId) -> Result<School, AppError> {
        let query = format!("SELECT {SCHOOL_COLUMNS} FROM schools WHERE id = $1");

        sqlx::query_as::<_, School>(&query)
            .bind(school_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("School not found")))
    }
}
