use anyhow::anyhow;
use schoolpro_core::{AppError, generate_slug};
use schoolpro_db::is_unique_violation;
use schoolpro_models::ids::SchoolId;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

use super::model::{BriefItem, CreateSubjectDto, SUBJECT_COLUMNS, Subject};

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(db, dto), fields(subject.name = %dto.name, db.operation = "INSERT", db.table = "subjects"))]
    pub async fn create_subject(db: &PgPool, dto: CreateSubjectDto) -> Result<Subject, AppError> {
        let slug = generate_slug(&dto.name)?;

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM subjects WHERE slug = $1)")
                .bind(&slug)
                .fetch_one(db)
                .await?;

        if exists {
            debug!(subject.slug = %slug, "Subject slug already taken");
            return Err(AppError::conflict(anyhow!("Subject Already Exists")));
        }

        let query = format!(
            "INSERT INTO subjects (
                name, slug, code, short_name, category, subject_type,
                department_id, department_name, school_id
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {SUBJECT_COLUMNS}"
        );

        let subject = sqlx::query_as::<_, Subject>(&query)
            .bind(&dto.name)
            .bind(&slug)
            .bind(&dto.code)
            .bind(&dto.short_name)
            .bind(&dto.category)
            .bind(&dto.subject_type)
            .bind(dto.department_id)
            .bind(&dto.department_name)
            .bind(dto.school_id)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return AppError::conflict(anyhow!("Subject Already Exists"));
                }
                error!(error = %e, "Database error creating subject");
                AppError::from(e)
            })?;

        info!(subject.id = %subject.id, subject.slug = %subject.slug, "Subject created successfully");

        Ok(subject)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "subjects"))]
    pub async fn get_subjects(
        db: &PgPool,
        school_id: Option<SchoolId>,
    ) -> Result<Vec<Subject>, AppError> {
        let query = format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects
             WHERE ($1::uuid IS NULL OR school_id = $1)
             ORDER BY created_at ASC"
        );

        let subjects = sqlx::query_as::<_, Subject>(&query)
            .bind(school_id)
            .fetch_all(db)
            .await?;

        Ok(subjects)
    }

    #[instrument(skip(db), fields(school.id = %school_id))]
    pub async fn get_brief_subjects(
        db: &PgPool,
        school_id: SchoolId,
    ) -> Result<Vec<BriefItem>, AppError> {
        let subjects = sqlx::query_as::<_, BriefItem>(
            "SELECT id, name FROM subjects WHERE school_id = $1 ORDER BY created_at DESC",
        )
        .bind(school_id)
        .fetch_all(db)
        .await?;

        Ok(subjects)
    }
}
