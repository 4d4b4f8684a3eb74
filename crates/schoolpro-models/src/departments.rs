use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{DepartmentId, SchoolId, SubjectId, TeacherId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    /// Stored verbatim from `name`; departments are not slugified.
    pub slug: String,
    pub budget: Option<f64>,
    pub budget_year: Option<String>,
    pub school_id: SchoolId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const DEPARTMENT_COLUMNS: &str =
    "id, name, slug, budget, budget_year, school_id, created_at, updated_at";

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Budget cannot be negative"))]
    pub budget: Option<f64>,
    pub budget_year: Option<String>,
    pub school_id: SchoolId,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentTeacher {
    pub id: TeacherId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub employee_id: String,
    pub designation: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSubject {
    pub id: SubjectId,
    pub name: String,
    pub code: Option<String>,
    pub short_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentWithRelations {
    #[serde(flatten)]
    pub department: Department,
    pub teachers: Vec<DepartmentTeacher>,
    pub subjects: Vec<DepartmentSubject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_dto_optional_budget() {
        let dto: CreateDepartmentDto = serde_json::from_value(serde_json::json!({
            "name": "Sciences",
            "schoolId": "6f1b6a8e-1d4a-4c55-9a43-5a0f4c1f8e11"
        }))
        .unwrap();
        assert!(dto.budget.is_none());
        assert!(dto.validate().is_ok());

        let negative: CreateDepartmentDto = serde_json::from_value(serde_json::json!({
            "name": "Sciences",
            "budget": -5.0,
            "budgetYear": "2024",
            "schoolId": "6f1b6a8e-1d4a-4c55-9a43-5a0f4c1f8e11"
        }))
        .unwrap();
        assert!(negative.validate().is_err());
    }
}
