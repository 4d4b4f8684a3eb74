use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{DepartmentId, SchoolId, SubjectId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub slug: String,
    pub code: Option<String>,
    pub short_name: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub subject_type: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub department_name: Option<String>,
    pub school_id: SchoolId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const SUBJECT_COLUMNS: &str = "id, name, slug, code, short_name, category, subject_type, \
     department_id, department_name, school_id, created_at, updated_at";

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub code: Option<String>,
    pub short_name: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub subject_type: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub department_name: Option<String>,
    pub school_id: SchoolId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_type_uses_type_key() {
        let dto: CreateSubjectDto = serde_json::from_value(serde_json::json!({
            "name": "Further Maths",
            "shortName": "F.Maths",
            "type": "ELECTIVE",
            "schoolId": "6f1b6a8e-1d4a-4c55-9a43-5a0f4c1f8e11"
        }))
        .unwrap();

        assert_eq!(dto.subject_type.as_deref(), Some("ELECTIVE"));
        assert_eq!(dto.short_name.as_deref(), Some("F.Maths"));
    }
}
