use anyhow::anyhow;
use schoolpro_core::{AppError, PROFILE_HASH_COST, hash_password_with_cost, parse_date};
use schoolpro_db::is_unique_violation;
use schoolpro_models::ids::SchoolId;
use schoolpro_models::roles::UserRole;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};

use crate::modules::users::{CreateUserDto, UserService};

use super::model::{CreateStudentDto, STUDENT_COLUMNS, Student, next_sequence};

pub struct StudentService;

impl StudentService {
    /// Creates the student's user account and profile in one transaction.
    #[instrument(skip(db, dto), fields(student.email = %dto.email, db.operation = "INSERT", db.table = "students"))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        let dob = parse_date(&dto.dob)?;
        let admission_date = parse_date(&dto.admission_date)?;

        Self::ensure_unique(db, &dto).await?;

        let mut tx = db.begin().await?;

        let user = UserService::create_profile_user(
            &mut *tx,
            CreateUserDto {
                email: dto.email.clone(),
                password: dto.password.clone(),
                role: UserRole::Student,
                name: format!("{} {}", dto.name, dto.surname),
                phone: dto.phone.clone(),
                image: dto.image_url.clone(),
                school_id: Some(dto.school_id),
                school_name: dto.school_name.clone(),
            },
        )
        .await?;

        let password_hash = hash_password_with_cost(&dto.password, PROFILE_HASH_COST)?;

        let query = format!(
            "INSERT INTO students (
                name, surname, other_names, email, parent_id, parent_name, class_id,
                class_title, section_id, section_title, gender, dob, reg_no, phone,
                nationality, state, birth_certificate_no, religion, roll_no,
                admission_date, address, image_url, password, school_id, school_name, user_id
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20, $21, $22, $23, $24, $25, $26)
             RETURNING {STUDENT_COLUMNS}"
        );

        let student = sqlx::query_as::<_, Student>(&query)
            .bind(&dto.name)
            .bind(&dto.surname)
            .bind(&dto.other_names)
            .bind(&dto.email)
            .bind(dto.parent_id)
            .bind(&dto.parent_name)
            .bind(dto.class_id)
            .bind(&dto.class_title)
            .bind(dto.section_id)
            .bind(&dto.section_title)
            .bind(&dto.gender)
            .bind(dob)
            .bind(&dto.reg_no)
            .bind(&dto.phone)
            .bind(&dto.nationality)
            .bind(&dto.state)
            .bind(&dto.birth_certificate_no)
            .bind(&dto.religion)
            .bind(&dto.roll_no)
            .bind(admission_date)
            .bind(&dto.address)
            .bind(&dto.image_url)
            .bind(&password_hash)
            .bind(dto.school_id)
            .bind(&dto.school_name)
            .bind(user.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    warn!(error = %e, "Student insert hit a unique constraint");
                    return AppError::conflict(anyhow!("student already exists"));
                }
                error!(error = %e, "Database error creating student");
                AppError::from(e)
            })?;

        tx.commit().await?;

        info!(student.id = %student.id, user.id = %user.id, "Student created successfully");

        Ok(student)
    }

    async fn ensure_unique(db: &PgPool, dto: &CreateStudentDto) -> Result<(), AppError> {
        let checks = [
            ("email", dto.email.as_str(), "student with this email already exists"),
            (
                "birth_certificate_no",
                dto.birth_certificate_no.as_str(),
                "student with this birth certificate number already exists",
            ),
            (
                "roll_no",
                dto.roll_no.as_str(),
                "student with this roll number already exists",
            ),
        ];

        for (column, value, message) in checks {
            let query = format!("SELECT EXISTS(SELECT 1 FROM students WHERE {column} = $1)");
            let exists = sqlx::query_scalar::<_, bool>(&query)
                .bind(value)
                .fetch_one(db)
                .await?;

            if exists {
                debug!(column, "Student uniqueness check failed");
                return Err(AppError::conflict(anyhow!(message)));
            }
        }

        Ok(())
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "students"))]
    pub async fn get_students(
        db: &PgPool,
        school_id: Option<SchoolId>,
    ) -> Result<Vec<Student>, AppError> {
        let students = match school_id {
            Some(school_id) => {
                let query = format!(
                    "SELECT {STUDENT_COLUMNS} FROM students WHERE school_id = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Student>(&query)
                    .bind(school_id)
                    .fetch_all(db)
                    .await?
            }
            None => {
                let query =
                    format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY created_at DESC");
                sqlx::query_as::<_, Student>(&query).fetch_all(db).await?
            }
        };

        Ok(students)
    }

    /// The value suggested for the next registration number. Two callers
    /// racing here may be handed the same number.
    #[instrument(skip(db), fields(school.id = %school_id))]
    pub async fn next_sequence(db: &PgPool, school_id: SchoolId) -> Result<i64, AppError> {
        let last_reg_no = sqlx::query_scalar::<_, String>(
            "SELECT reg_no FROM students WHERE school_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(school_id)
        .fetch_optional(db)
        .await?;

        Ok(next_sequence(last_reg_no.as_deref()))
    }
}
