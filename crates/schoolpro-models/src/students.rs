//! Student profiles and registration numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{ClassId, ParentId, SchoolId, SectionId, StudentId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub surname: String,
    pub other_names: Option<String>,
    pub email: String,
    pub parent_id: Option<ParentId>,
    pub parent_name: Option<String>,
    pub class_id: Option<ClassId>,
    pub class_title: Option<String>,
    pub section_id: Option<SectionId>,
    pub section_title: Option<String>,
    pub gender: String,
    pub dob: DateTime<Utc>,
    pub reg_no: String,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub state: Option<String>,
    pub birth_certificate_no: String,
    pub religion: Option<String>,
    pub roll_no: String,
    pub admission_date: DateTime<Utc>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub school_id: SchoolId,
    pub school_name: Option<String>,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const STUDENT_COLUMNS: &str = "id, name, surname, other_names, email, parent_id, parent_name, \
     class_id, class_title, section_id, section_title, gender, dob, reg_no, phone, nationality, \
     state, birth_certificate_no, religion, roll_no, admission_date, address, image_url, \
     school_id, school_name, user_id, created_at, updated_at";

/// Payload for `POST /students`. Dates arrive as strings and are
/// normalized by the service before anything is written.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Surname is required"))]
    pub surname: String,
    pub other_names: Option<String>,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    pub parent_id: Option<ParentId>,
    pub parent_name: Option<String>,
    pub class_id: Option<ClassId>,
    pub class_title: Option<String>,
    pub section_id: Option<SectionId>,
    pub section_title: Option<String>,
    #[validate(length(min = 1, message = "Gender is required"))]
    pub gender: String,
    pub dob: String,
    #[validate(length(min = 1, message = "Registration number is required"))]
    pub reg_no: String,
    pub phone: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub nationality: Option<String>,
    pub state: Option<String>,
    #[validate(length(min = 1, message = "Birth certificate number is required"))]
    pub birth_certificate_no: String,
    pub religion: Option<String>,
    #[validate(length(min = 1, message = "Roll number is required"))]
    pub roll_no: String,
    pub admission_date: String,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub school_id: SchoolId,
    pub school_name: Option<String>,
}

/// Registration numbers look like `SCH/STD/2024/0007`; the fourth
/// `/`-separated segment is the running sequence.
const SEQUENCE_SEGMENT: usize = 3;

/// Returns the sequence number to suggest after `last_reg_no`.
///
/// A missing registration number, a missing fourth segment or a segment
/// without leading digits all count as sequence 0. A segment too large for
/// `i64` counts as `i64::MAX`, and the result saturates there. The result
/// is a hint for the client form; concurrent callers can receive the same
/// value.
pub fn next_sequence(last_reg_no: Option<&str>) -> i64 {
    let last = last_reg_no
        .and_then(|reg_no| reg_no.split('/').nth(SEQUENCE_SEGMENT))
        .map(|segment| {
            let digits: String = segment
                .trim_start()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            if digits.is_empty() {
                0
            } else {
                // Only overflow can fail here.
                digits.parse::<i64>().unwrap_or(i64::MAX)
            }
        })
        .unwrap_or(0);

    last.saturating_add(1)
}
