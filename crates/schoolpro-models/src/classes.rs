//! Classes and the sections they are split into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{ClassId, SchoolId, SectionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: ClassId,
    pub title: String,
    pub slug: String,
    pub school_id: SchoolId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const CLASS_COLUMNS: &str = "id, title, slug, school_id, created_at, updated_at";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub slug: String,
    pub class_id: ClassId,
    pub school_id: SchoolId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const SECTION_COLUMNS: &str = "id, title, slug, class_id, school_id, created_at, updated_at";

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub school_id: SchoolId,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub class_id: ClassId,
    pub school_id: SchoolId,
}

/// A section row as it appears inside a class listing.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionWithCount {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub section: Section,
    pub student_count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassWithSections {
    #[serde(flatten)]
    pub class: Class,
    pub student_count: i64,
    pub sections: Vec<SectionWithCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_with_sections_flattens_class_fields() {
        let class = Class {
            id: ClassId::new(),
            title: "JSS 1".to_string(),
            slug: "jss-1".to_string(),
            school_id: SchoolId::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let section = Section {
            id: SectionId::new(),
            title: "A".to_string(),
            slug: "a".to_string(),
            class_id: class.id,
            school_id: class.school_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(ClassWithSections {
            class,
            student_count: 3,
            sections: vec![SectionWithCount {
                section,
                student_count: 2,
            }],
        })
        .unwrap();

        assert_eq!(value["title"], "JSS 1");
        assert_eq!(value["studentCount"], 3);
        assert_eq!(value["sections"][0]["slug"], "a");
        assert_eq!(value["sections"][0]["studentCount"], 2);
        assert!(value.get("class").is_none());
    }

    #[test]
    fn test_create_class_requires_title() {
        let dto: CreateClassDto = serde_json::from_value(serde_json::json!({
            "title": "",
            "schoolId": "6f1b6a8e-1d4a-4c55-9a43-5a0f4c1f8e11"
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }
}
