//! Contact leads submitted from the public site.

use chrono::{DateTime, Utc};
use schoolpro_core::serde::deserialize_lenient_i32;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::ContactId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub school_name: String,
    pub school_website: Option<String>,
    pub students: i32,
    pub role: String,
    pub media: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const CONTACT_COLUMNS: &str = "id, full_name, email, phone, country, school_name, \
     school_website, students, role, media, message, created_at, updated_at";

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactDto {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "School name is required"))]
    pub school_name: String,
    pub school_website: Option<String>,
    /// Number of students at the school; forms send it as a string.
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    #[schema(value_type = i32)]
    #[validate(range(min = 0, message = "Students cannot be negative"))]
    pub students: i32,
    pub role: String,
    pub media: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_students_as_string() {
        let dto: CreateContactDto = serde_json::from_value(serde_json::json!({
            "fullName": "Jane Doe",
            "email": "jane@hilltop.test",
            "phone": "+2348000000000",
            "country": "Nigeria",
            "schoolName": "Hill Top",
            "schoolWebsite": "https://hilltop.test",
            "students": "450",
            "role": "Principal",
            "media": "Twitter",
            "message": "Hello"
        }))
        .unwrap();

        assert_eq!(dto.students, 450);
        assert!(dto.validate().is_ok());
    }
}
