use anyhow::anyhow;
use schoolpro_core::{
    AppError, PROFILE_HASH_COST, hash_password_with_cost, parse_optional_date,
};
use schoolpro_db::is_unique_violation;
use schoolpro_models::analytics::BriefItem;
use schoolpro_models::ids::{DepartmentId, SchoolId, TeacherId};
use schoolpro_models::roles::UserRole;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, error, info, instrument, warn};

use crate::modules::users::{CreateUserDto, UserService};

use super::model::{
    ALLOCATION_COLUMNS, AllocateSubjectsDto, AllocationItem, CreateTeacherDto,
    DEFAULT_TEACHER_IMAGE, GroupedAllocations, TEACHER_COLUMNS, Teacher,
    TeacherSubjectAllocation, TeacherWithDepartment, attach_departments, group_allocations,
    random_employee_id,
};

const DUPLICATE_TEACHER: &str = "Teacher with this email or NIN already exists";

pub struct TeacherService;

impl TeacherService {
    /// Creates the teacher's user account and profile in one transaction and
    /// assigns a fresh employee id.
    #[instrument(skip(db, dto), fields(teacher.email = %dto.email, db.operation = "INSERT", db.table = "teachers"))]
    pub async fn create_teacher(db: &PgPool, dto: CreateTeacherDto) -> Result<Teacher, AppError> {
        let dob = parse_optional_date(dto.dob.as_deref())?;
        let join_date = parse_optional_date(dto.join_date.as_deref())?;

        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM teachers WHERE email = $1 OR ($2::text IS NOT NULL AND nin = $2)
             )",
        )
        .bind(&dto.email)
        .bind(&dto.nin)
        .fetch_one(db)
        .await?;

        if taken {
            debug!("Teacher email or NIN already registered");
            return Err(AppError::conflict(anyhow!(DUPLICATE_TEACHER)));
        }

        let mut tx = db.begin().await?;

        let user = UserService::create_profile_user(
            &mut *tx,
            CreateUserDto {
                email: dto.email.clone(),
                password: dto.password.clone(),
                role: UserRole::Teacher,
                name: format!("{} {}", dto.first_name, dto.last_name),
                phone: dto.phone.clone(),
                image: dto.image_url.clone(),
                school_id: Some(dto.school_id),
                school_name: dto.school_name.clone(),
            },
        )
        .await?;

        let password_hash = hash_password_with_cost(&dto.password, PROFILE_HASH_COST)?;
        let employee_id = Self::generate_employee_id(&mut *tx).await?;

        let query = format!(
            "INSERT INTO teachers (
                title, first_name, last_name, email, phone, whatsapp_no, gender, dob, country,
                join_date, designation, qualification, years_of_experience, nin, religion,
                department_id, department_name, address, image_url, employee_id, is_active,
                password, school_id, school_name, user_id
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20, TRUE, $21, $22, $23, $24)
             RETURNING {TEACHER_COLUMNS}"
        );

        let teacher = sqlx::query_as::<_, Teacher>(&query)
            .bind(&dto.title)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&dto.email)
            .bind(&dto.phone)
            .bind(&dto.whatsapp_no)
            .bind(&dto.gender)
            .bind(dob)
            .bind(&dto.country)
            .bind(join_date)
            .bind(&dto.designation)
            .bind(&dto.qualification)
            .bind(dto.years_of_experience)
            .bind(&dto.nin)
            .bind(&dto.religion)
            .bind(dto.department_id)
            .bind(&dto.department_name)
            .bind(&dto.address)
            .bind(&dto.image_url)
            .bind(&employee_id)
            .bind(&password_hash)
            .bind(dto.school_id)
            .bind(&dto.school_name)
            .bind(user.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    warn!(error = %e, "Teacher insert hit a unique constraint");
                    return AppError::conflict(anyhow!(DUPLICATE_TEACHER));
                }
                error!(error = %e, "Database error creating teacher");
                AppError::from(e)
            })?;

        tx.commit().await?;

        info!(
            teacher.id = %teacher.id,
            teacher.employee_id = %teacher.employee_id,
            "Teacher created successfully"
        );

        Ok(teacher)
    }

    /// Draws `TCH` ids until one is unused.
    async fn generate_employee_id(conn: &mut PgConnection) -> Result<String, AppError> {
        loop {
            let candidate = random_employee_id();

            let taken = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM teachers WHERE employee_id = $1)",
            )
            .bind(&candidate)
            .fetch_one(&mut *conn)
            .await?;

            if !taken {
                return Ok(candidate);
            }

            debug!(employee_id = %candidate, "Employee id collision, drawing again");
        }
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "teachers"))]
    pub async fn get_teachers(
        db: &PgPool,
        school_id: Option<SchoolId>,
    ) -> Result<Vec<TeacherWithDepartment>, AppError> {
        let teachers = match school_id {
            Some(school_id) => {
                let query = format!(
                    "SELECT {TEACHER_COLUMNS} FROM teachers WHERE school_id = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Teacher>(&query)
                    .bind(school_id)
                    .fetch_all(db)
                    .await?
            }
            None => {
                let query =
                    format!("SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY created_at DESC");
                sqlx::query_as::<_, Teacher>(&query).fetch_all(db).await?
            }
        };

        let department_ids: Vec<DepartmentId> =
            teachers.iter().filter_map(|t| t.department_id).collect();

        let departments = if department_ids.is_empty() {
            Vec::new()
        } else {
            sqlx::query_as::<_, BriefItem>("SELECT id, name FROM departments WHERE id = ANY($1)")
                .bind(&department_ids)
                .fetch_all(db)
                .await?
        };

        Ok(attach_departments(teachers, departments))
    }

    /// Records every allocation in the batch or none of them.
    #[instrument(skip(db, dto), fields(teacher.id = %dto.teacher_id, db.operation = "INSERT", db.table = "teacher_subject_allocations"))]
    pub async fn allocate_subjects(
        db: &PgPool,
        dto: AllocateSubjectsDto,
    ) -> Result<Vec<TeacherSubjectAllocation>, AppError> {
        let mut tx = db.begin().await?;

        let teacher = Self::find_teacher(&mut *tx, dto.teacher_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Teacher not found")))?;

        let mut created = Vec::with_capacity(dto.allocations.len());
        for item in &dto.allocations {
            let allocation = Self::allocate_one(&mut *tx, &teacher, dto.school_id, item).await?;
            created.push(allocation);
        }

        tx.commit().await?;

        info!(count = created.len(), "Subjects allocated to teacher");

        Ok(created)
    }

    async fn find_teacher(
        conn: &mut PgConnection,
        teacher_id: TeacherId,
    ) -> Result<Option<Teacher>, AppError> {
        let query = format!("SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1");
        let teacher = sqlx::query_as::<_, Teacher>(&query)
            .bind(teacher_id)
            .fetch_optional(conn)
            .await?;
        Ok(teacher)
    }

    async fn allocate_one(
        conn: &mut PgConnection,
        teacher: &Teacher,
        school_id: SchoolId,
        item: &AllocationItem,
    ) -> Result<TeacherSubjectAllocation, AppError> {
        let subject_name =
            sqlx::query_scalar::<_, String>("SELECT name FROM subjects WHERE id = $1")
                .bind(item.subject_id)
                .fetch_optional(&mut *conn)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(anyhow!("Subject with id {} not found", item.subject_id))
                })?;

        let class_name = sqlx::query_scalar::<_, String>("SELECT title FROM classes WHERE id = $1")
            .bind(item.class_id)
            .fetch_optional(&mut *conn)
            .await?
            .unwrap_or_default();

        let section_name =
            sqlx::query_scalar::<_, String>("SELECT title FROM sections WHERE id = $1")
                .bind(item.section_id)
                .fetch_optional(&mut *conn)
                .await?
                .unwrap_or_default();

        let teacher_name = teacher.full_name();
        let already_allocated = || {
            AppError::conflict(anyhow!(
                "The subject \"{}\" has already been allocated to teacher \"{}\" for class \"{}\" and section \"{}\".",
                subject_name,
                teacher_name,
                class_name,
                section_name
            ))
        };

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM teacher_subject_allocations
                WHERE teacher_id = $1 AND class_id = $2 AND section_id = $3 AND subject_id = $4
             )",
        )
        .bind(teacher.id)
        .bind(item.class_id)
        .bind(item.section_id)
        .bind(item.subject_id)
        .fetch_one(&mut *conn)
        .await?;

        if exists {
            warn!(subject.id = %item.subject_id, "Subject already allocated for class section");
            return Err(already_allocated());
        }

        let teacher_image = teacher
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_TEACHER_IMAGE);

        let query = format!(
            "INSERT INTO teacher_subject_allocations (
                teacher_id, subject_id, class_id, section_id, school_id,
                teacher_name, teacher_image, subject_name, class_name, section_name
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {ALLOCATION_COLUMNS}"
        );

        sqlx::query_as::<_, TeacherSubjectAllocation>(&query)
            .bind(teacher.id)
            .bind(item.subject_id)
            .bind(item.class_id)
            .bind(item.section_id)
            .bind(school_id)
            .bind(&teacher_name)
            .bind(teacher_image)
            .bind(&subject_name)
            .bind(&class_name)
            .bind(&section_name)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return already_allocated();
                }
                error!(error = %e, "Database error creating allocation");
                AppError::from(e)
            })
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "teacher_subject_allocations"))]
    pub async fn get_grouped_allocations(
        db: &PgPool,
        school_id: Option<SchoolId>,
    ) -> Result<GroupedAllocations, AppError> {
        let allocations = match school_id {
            Some(school_id) => {
                let query = format!(
                    "SELECT {ALLOCATION_COLUMNS} FROM teacher_subject_allocations
                     WHERE school_id = $1
                     ORDER BY class_id, section_id, created_at"
                );
                sqlx::query_as::<_, TeacherSubjectAllocation>(&query)
                    .bind(school_id)
                    .fetch_all(db)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {ALLOCATION_COLUMNS} FROM teacher_subject_allocations
                     ORDER BY class_id, section_id, created_at"
                );
                sqlx::query_as::<_, TeacherSubjectAllocation>(&query)
                    .fetch_all(db)
                    .await?
            }
        };

        Ok(group_allocations(allocations))
    }
}
