use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{ParentId, SchoolId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    pub id: ParentId,
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub relationship: Option<String>,
    #[serde(rename = "NIN")]
    pub nin: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub state: Option<String>,
    pub whatsapp_no: Option<String>,
    pub religion: Option<String>,
    pub contact_method: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub school_id: SchoolId,
    pub school_name: Option<String>,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const PARENT_COLUMNS: &str = "id, title, first_name, last_name, email, relationship, nin, \
     gender, phone, nationality, state, whatsapp_no, religion, contact_method, occupation, \
     address, image_url, school_id, school_name, user_id, created_at, updated_at";

impl Parent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateParentDto {
    pub title: Option<String>,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    pub relationship: Option<String>,
    #[serde(rename = "NIN")]
    pub nin: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub state: Option<String>,
    pub whatsapp_no: Option<String>,
    pub religion: Option<String>,
    pub contact_method: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub school_id: SchoolId,
    pub school_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_dto_reads_nin_key() {
        let dto: CreateParentDto = serde_json::from_value(serde_json::json!({
            "firstName": "Chidi",
            "lastName": "Obi",
            "email": "chidi@school.test",
            "NIN": "99887766554",
            "contactMethod": "WhatsApp",
            "password": "secret123",
            "schoolId": "6f1b6a8e-1d4a-4c55-9a43-5a0f4c1f8e11"
        }))
        .unwrap();

        assert_eq!(dto.nin.as_deref(), Some("99887766554"));
        assert_eq!(dto.contact_method.as_deref(), Some("WhatsApp"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_parent_dto_rejects_short_password() {
        let dto: CreateParentDto = serde_json::from_value(serde_json::json!({
            "firstName": "Chidi",
            "lastName": "Obi",
            "email": "chidi@school.test",
            "password": "abc",
            "schoolId": "6f1b6a8e-1d4a-4c55-9a43-5a0f4c1f8e11"
        }))
        .unwrap();

        assert!(dto.validate().is_err());
    }
}
