use std::collections::HashMap;

use anyhow::anyhow;
use schoolpro_core::AppError;
use schoolpro_db::is_unique_violation;
use schoolpro_models::ids::{DepartmentId, SchoolId};
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

use super::model::{
    BriefItem, CreateDepartmentDto, DEPARTMENT_COLUMNS, Department, DepartmentSubject,
    DepartmentTeacher, DepartmentWithRelations,
};

#[derive(sqlx::FromRow)]
struct TeacherRow {
    department_id: DepartmentId,
    #[sqlx(flatten)]
    teacher: DepartmentTeacher,
}

#[derive(sqlx::FromRow)]
struct SubjectRow {
    department_id: DepartmentId,
    #[sqlx(flatten)]
    subject: DepartmentSubject,
}

pub struct DepartmentService;

impl DepartmentService {
    /// Department slugs are the raw name, so "Sciences" and "sciences" are
    /// distinct departments.
    #[instrument(skip(db, dto), fields(department.name = %dto.name, db.operation = "INSERT", db.table = "departments"))]
    pub async fn create_department(
        db: &PgPool,
        dto: CreateDepartmentDto,
    ) -> Result<Department, AppError> {
        let slug = dto.name.clone();

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM departments WHERE slug = $1)",
        )
        .bind(&slug)
        .fetch_one(db)
        .await?;

        if exists {
            debug!("Department slug already taken");
            return Err(AppError::conflict(anyhow!("Department Already Exists")));
        }

        let query = format!(
            "INSERT INTO departments (name, slug, budget, budget_year, school_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {DEPARTMENT_COLUMNS}"
        );

        let department = sqlx::query_as::<_, Department>(&query)
            .bind(&dto.name)
            .bind(&slug)
            .bind(dto.budget)
            .bind(&dto.budget_year)
            .bind(dto.school_id)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return AppError::conflict(anyhow!("Department Already Exists"));
                }
                error!(error = %e, "Database error creating department");
                AppError::from(e)
            })?;

        info!(department.id = %department.id, "Department created successfully");

        Ok(department)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "departments"))]
    pub async fn get_departments(
        db: &PgPool,
        school_id: Option<SchoolId>,
    ) -> Result<Vec<DepartmentWithRelations>, AppError> {
        let query = format!(
            "SELECT {DEPARTMENT_COLUMNS} FROM departments
             WHERE ($1::uuid IS NULL OR school_id = $1)
             ORDER BY created_at ASC"
        );
        let departments = sqlx::query_as::<_, Department>(&query)
            .bind(school_id)
            .fetch_all(db)
            .await?;

        let department_ids: Vec<DepartmentId> = departments.iter().map(|d| d.id).collect();

        let teachers = sqlx::query_as::<_, TeacherRow>(
            "SELECT department_id, id, first_name, last_name, email, employee_id, designation
             FROM teachers
             WHERE department_id = ANY($1)
             ORDER BY created_at DESC",
        )
        .bind(&department_ids)
        .fetch_all(db)
        .await?;

        let subjects = sqlx::query_as::<_, SubjectRow>(
            "SELECT department_id, id, name, code, short_name
             FROM subjects
             WHERE department_id = ANY($1)
             ORDER BY created_at ASC",
        )
        .bind(&department_ids)
        .fetch_all(db)
        .await?;

        let mut teachers_by_department: HashMap<DepartmentId, Vec<DepartmentTeacher>> =
            HashMap::new();
        for row in teachers {
            teachers_by_department
                .entry(row.department_id)
                .or_default()
                .push(row.teacher);
        }

        let mut subjects_by_department: HashMap<DepartmentId, Vec<DepartmentSubject>> =
            HashMap::new();
        for row in subjects {
            subjects_by_department
                .entry(row.department_id)
                .or_default()
                .push(row.subject);
        }

        Ok(departments
            .into_iter()
            .map(|department| DepartmentWithRelations {
                teachers: teachers_by_department
                    .remove(&department.id)
                    .unwrap_or_default(),
                subjects: subjects_by_department
                    .remove(&department.id)
                    .unwrap_or_default(),
                department,
            })
            .collect())
    }

    #[instrument(skip(db), fields(school.id = %school_id))]
    pub async fn get_brief_departments(
        db: &PgPool,
        school_id: SchoolId,
    ) -> Result<Vec<BriefItem>, AppError> {
        let departments = sqlx::query_as::<_, BriefItem>(
            "SELECT id, name FROM departments WHERE school_id = $1 ORDER BY created_at DESC",
        )
        .bind(school_id)
        .fetch_all(db)
        .await?;

        Ok(departments)
    }
}
