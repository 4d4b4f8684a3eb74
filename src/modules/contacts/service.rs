use anyhow::anyhow;
use schoolpro_core::AppError;
use schoolpro_db::is_unique_violation;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

use super::model::{CONTACT_COLUMNS, Contact, CreateContactDto};

const DUPLICATE_CONTACT: &str = "A contact with this email or school already exists!";

pub struct ContactService;

impl ContactService {
    #[instrument(skip(db, dto), fields(contact.email = %dto.email, db.operation = "INSERT", db.table = "contacts"))]
    pub async fn create_contact(db: &PgPool, dto: CreateContactDto) -> Result<Contact, AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM contacts WHERE email = $1 OR school_name = $2)",
        )
        .bind(&dto.email)
        .bind(&dto.school_name)
        .fetch_one(db)
        .await?;

        if taken {
            debug!("Contact email or school already recorded");
            return Err(AppError::conflict(anyhow!(DUPLICATE_CONTACT)));
        }

        let query = format!(
            "INSERT INTO contacts (
                full_name, email, phone, country, school_name, school_website,
                students, role, media, message
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {CONTACT_COLUMNS}"
        );

        let contact = sqlx::query_as::<_, Contact>(&query)
            .bind(&dto.full_name)
            .bind(&dto.email)
            .bind(&dto.phone)
            .bind(&dto.country)
            .bind(&dto.school_name)
            .bind(&dto.school_website)
            .bind(dto.students)
            .bind(&dto.role)
            .bind(&dto.media)
            .bind(&dto.message)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return AppError::conflict(anyhow!(DUPLICATE_CONTACT));
                }
                error!(error = %e, "Database error creating contact");
                AppError::from(e)
            })?;

        info!(contact.id = %contact.id, "Contact created successfully");

        Ok(contact)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "contacts"))]
    pub async fn get_contacts(db: &PgPool) -> Result<Vec<Contact>, AppError> {
        let query = format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY created_at DESC");
        let contacts = sqlx::query_as::<_, Contact>(&query).fetch_all(db).await?;
        Ok(contacts)
    }
}
