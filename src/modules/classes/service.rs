use std::collections::HashMap;

use anyhow::anyhow;
use schoolpro_core::{AppError, generate_slug};
use schoolpro_db::is_unique_violation;
use schoolpro_models::ids::{ClassId, SchoolId};
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

use super::model::{
    CLASS_COLUMNS, Class, ClassWithSections, CreateClassDto, CreateSectionDto, SECTION_COLUMNS,
    Section, SectionWithCount,
};

#[derive(sqlx::FromRow)]
struct ClassWithCount {
    #[sqlx(flatten)]
    class: Class,
    student_count: i64,
}

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, dto), fields(class.title = %dto.title, db.operation = "INSERT", db.table = "classes"))]
    pub async fn create_class(db: &PgPool, dto: CreateClassDto) -> Result<Class, AppError> {
        let slug = generate_slug(&dto.title)?;

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM classes WHERE slug = $1)")
                .bind(&slug)
                .fetch_one(db)
                .await?;

        if exists {
            debug!(class.slug = %slug, "Class slug already taken");
            return Err(AppError::conflict(anyhow!("Class Already Exists")));
        }

        let query = format!(
            "INSERT INTO classes (title, slug, school_id) VALUES ($1, $2, $3) RETURNING {CLASS_COLUMNS}"
        );

        let class = sqlx::query_as::<_, Class>(&query)
            .bind(&dto.title)
            .bind(&slug)
            .bind(dto.school_id)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return AppError::conflict(anyhow!("Class Already Exists"));
                }
                error!(error = %e, "Database error creating class");
                AppError::from(e)
            })?;

        info!(class.id = %class.id, class.slug = %class.slug, "Class created successfully");

        Ok(class)
    }

    /// Classes ordered by title, each with its student count and sections.
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "classes"))]
    pub async fn get_classes(
        db: &PgPool,
        school_id: Option<SchoolId>,
    ) -> Result<Vec<ClassWithSections>, AppError> {
        let query = format!(
            "SELECT {CLASS_COLUMNS},
                (SELECT COUNT(*) FROM students WHERE students.class_id = classes.id) AS student_count
             FROM classes
             WHERE ($1::uuid IS NULL OR school_id = $1)
             ORDER BY title ASC"
        );

        let classes = sqlx::query_as::<_, ClassWithCount>(&query)
            .bind(school_id)
            .fetch_all(db)
            .await?;

        let class_ids: Vec<ClassId> = classes.iter().map(|row| row.class.id).collect();

        let query = format!(
            "SELECT {SECTION_COLUMNS},
                (SELECT COUNT(*) FROM students WHERE students.section_id = sections.id) AS student_count
             FROM sections
             WHERE class_id = ANY($1)
             ORDER BY title ASC"
        );

        let sections = sqlx::query_as::<_, SectionWithCount>(&query)
            .bind(&class_ids)
            .fetch_all(db)
            .await?;

        let mut sections_by_class: HashMap<ClassId, Vec<SectionWithCount>> = HashMap::new();
        for section in sections {
            sections_by_class
                .entry(section.section.class_id)
                .or_default()
                .push(section);
        }

        Ok(classes
            .into_iter()
            .map(|row| ClassWithSections {
                sections: sections_by_class.remove(&row.class.id).unwrap_or_default(),
                student_count: row.student_count,
                class: row.class,
            })
            .collect())
    }

    #[instrument(skip(db, dto), fields(section.title = %dto.title, db.operation = "INSERT", db.table = "sections"))]
    pub async fn create_section(db: &PgPool, dto: CreateSectionDto) -> Result<Section, AppError> {
        let slug = generate_slug(&dto.title)?;

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM sections WHERE slug = $1)")
                .bind(&slug)
                .fetch_one(db)
                .await?;

        if exists {
            debug!(section.slug = %slug, "Section slug already taken");
            return Err(AppError::conflict(anyhow!("Section Already Exists")));
        }

        let query = format!(
            "INSERT INTO sections (title, slug, class_id, school_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {SECTION_COLUMNS}"
        );

        let section = sqlx::query_as::<_, Section>(&query)
            .bind(&dto.title)
            .bind(&slug)
            .bind(dto.class_id)
            .bind(dto.school_id)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return AppError::conflict(anyhow!("Section Already Exists"));
                }
                error!(error = %e, "Database error creating section");
                AppError::from(e)
            })?;

        info!(section.id = %section.id, "Section created successfully");

        Ok(section)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "sections"))]
    pub async fn get_sections(db: &PgPool) -> Result<Vec<Section>, AppError> {
        let query = format!("SELECT {SECTION_COLUMNS} FROM sections ORDER BY title ASC");
        let sections = sqlx::query_as::<_, Section>(&query).fetch_all(db).await?;
        Ok(sections)
    }
}
