use anyhow::anyhow;
use schoolpro_core::{AppError, PROFILE_HASH_COST, hash_password_with_cost};
use schoolpro_db::is_unique_violation;
use schoolpro_models::ids::SchoolId;
use schoolpro_models::roles::UserRole;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};

use crate::modules::users::{CreateUserDto, UserService};

use super::model::{CreateParentDto, PARENT_COLUMNS, Parent};

const DUPLICATE_PARENT: &str = "Parent with this email or NIN already exists";

pub struct ParentService;

impl ParentService {
    #[instrument(skip(db, dto), fields(parent.email = %dto.email, db.operation = "INSERT", db.table = "parents"))]
    pub async fn create_parent(db: &PgPool, dto: CreateParentDto) -> Result<Parent, AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM parents WHERE email = $1 OR ($2::text IS NOT NULL AND nin = $2)
             )",
        )
        .bind(&dto.email)
        .bind(&dto.nin)
        .fetch_one(db)
        .await?;

        if taken {
            debug!("Parent email or NIN already registered");
            return Err(AppError::conflict(anyhow!(DUPLICATE_PARENT)));
        }

        let mut tx = db.begin().await?;

        let user = UserService::create_profile_user(
            &mut *tx,
            CreateUserDto {
                email: dto.email.clone(),
                password: dto.password.clone(),
                role: UserRole::Parent,
                name: format!("{} {}", dto.first_name, dto.last_name),
                phone: dto.phone.clone(),
                image: dto.image_url.clone(),
                school_id: Some(dto.school_id),
                school_name: dto.school_name.clone(),
            },
        )
        .await?;

        let password_hash = hash_password_with_cost(&dto.password, PROFILE_HASH_COST)?;

        let query = format!(
            "INSERT INTO parents (
                title, first_name, last_name, email, relationship, nin, gender, phone,
                nationality, state, whatsapp_no, religion, contact_method, occupation,
                address, image_url, password, school_id, school_name, user_id
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20)
             RETURNING {PARENT_COLUMNS}"
        );

        let parent = sqlx::query_as::<_, Parent>(&query)
            .bind(&dto.title)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&dto.email)
            .bind(&dto.relationship)
            .bind(&dto.nin)
            .bind(&dto.gender)
            .bind(&dto.phone)
            .bind(&dto.nationality)
            .bind(&dto.state)
            .bind(&dto.whatsapp_no)
            .bind(&dto.religion)
            .bind(&dto.contact_method)
            .bind(&dto.occupation)
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
                    warn!(error = %e, "Parent insert hit a unique constraint");
                    return AppError::conflict(anyhow!(DUPLICATE_PARENT));
                }
                error!(error = %e, "Database error creating parent");
                AppError::from(e)
            })?;

        tx.commit().await?;

        info!(parent.id = %parent.id, user.id = %user.id, "Parent created successfully");

        Ok(parent)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "parents"))]
    pub async fn get_parents(
        db: &PgPool,
        school_id: Option<SchoolId>,
    ) -> Result<Vec<Parent>, AppError> {
        let parents = match school_id {
            Some(school_id) => {
                let query = format!(
                    "SELECT {PARENT_COLUMNS} FROM parents WHERE school_id = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Parent>(&query)
                    .bind(school_id)
                    .fetch_all(db)
                    .await?
            }
            None => {
                let query = format!("SELECT {PARENT_COLUMNS} FROM parents ORDER BY created_at DESC");
                sqlx::query_as::<_, Parent>(&query).fetch_all(db).await?
            }
        };

        Ok(parents)
    }
}
