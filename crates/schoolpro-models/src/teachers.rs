//! Teacher profiles, employee ids and subject allocations.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use rand::Rng;
use schoolpro_core::serde::deserialize_lenient_i32;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::analytics::BriefItem;
use crate::ids::{
    AllocationId, ClassId, DepartmentId, SchoolId, SectionId, SubjectId, TeacherId, UserId,
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub whatsapp_no: Option<String>,
    pub gender: String,
    pub dob: Option<DateTime<Utc>>,
    pub country: Option<String>,
    pub join_date: Option<DateTime<Utc>>,
    pub designation: Option<String>,
    pub qualification: Option<String>,
    pub years_of_experience: i32,
    #[serde(rename = "NIN")]
    pub nin: Option<String>,
    pub religion: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub department_name: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub employee_id: String,
    pub is_active: bool,
    pub school_id: SchoolId,
    pub school_name: Option<String>,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const TEACHER_COLUMNS: &str = "id, title, first_name, last_name, email, phone, whatsapp_no, \
     gender, dob, country, join_date, designation, qualification, years_of_experience, nin, \
     religion, department_id, department_name, address, image_url, employee_id, is_active, \
     school_id, school_name, user_id, created_at, updated_at";

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A teacher as listed, with the brief department it belongs to.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeacherWithDepartment {
    #[serde(flatten)]
    pub teacher: Teacher,
    pub department: Option<BriefItem>,
}

/// Pairs each teacher with its department from `departments`. A teacher
/// whose department is unset or no longer exists gets `None`.
pub fn attach_departments(
    teachers: Vec<Teacher>,
    departments: Vec<BriefItem>,
) -> Vec<TeacherWithDepartment> {
    let by_id: HashMap<uuid::Uuid, BriefItem> =
        departments.into_iter().map(|d| (d.id, d)).collect();

    teachers
        .into_iter()
        .map(|teacher| {
            let department = teacher
                .department_id
                .and_then(|id| by_id.get(&id.into_inner()).cloned());
            TeacherWithDepartment {
                teacher,
                department,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherDto {
    pub title: Option<String>,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    pub phone: Option<String>,
    pub whatsapp_no: Option<String>,
    #[validate(length(min = 1, message = "Gender is required"))]
    pub gender: String,
    pub dob: Option<String>,
    pub country: Option<String>,
    pub join_date: Option<String>,
    pub designation: Option<String>,
    pub qualification: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[schema(value_type = i32)]
    pub years_of_experience: i32,
    #[serde(rename = "NIN")]
    pub nin: Option<String>,
    pub religion: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub department_name: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub school_id: SchoolId,
    pub school_name: Option<String>,
}

pub const EMPLOYEE_ID_PREFIX: &str = "TCH";

pub fn format_employee_id(number: u32) -> String {
    format!("{}{}", EMPLOYEE_ID_PREFIX, number)
}

/// Draws a random `TCH` + 5 digit candidate. Uniqueness is checked by the
/// caller against storage.
pub fn random_employee_id() -> String {
    let number = rand::thread_rng().gen_range(10_000..=99_999);
    format_employee_id(number)
}

/// Image recorded on an allocation when the teacher has none.
pub const DEFAULT_TEACHER_IMAGE: &str = "/images/empty-box.png";

/// A subject assigned to a teacher for one class section. Display fields
/// are copies taken when the allocation was made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSubjectAllocation {
    pub id: AllocationId,
    pub teacher_id: TeacherId,
    pub subject_id: SubjectId,
    pub class_id: ClassId,
    pub section_id: SectionId,
    pub school_id: SchoolId,
    pub teacher_name: String,
    pub teacher_image: String,
    pub subject_name: String,
    pub class_name: String,
    pub section_name: String,
    pub created_at: DateTime<Utc>,
}

pub const ALLOCATION_COLUMNS: &str = "id, teacher_id, subject_id, class_id, section_id, \
     school_id, teacher_name, teacher_image, subject_name, class_name, section_name, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocationItem {
    pub subject_id: SubjectId,
    pub class_id: ClassId,
    pub section_id: SectionId,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocateSubjectsDto {
    pub teacher_id: TeacherId,
    pub school_id: SchoolId,
    #[validate(length(min = 1, message = "At least one allocation is required"))]
    pub allocations: Vec<AllocationItem>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupedAllocations {
    pub grouped_allocations: BTreeMap<String, Vec<TeacherSubjectAllocation>>,
}

/// Key under which an allocation is grouped: `"{classId}-{sectionId}"`.
pub fn allocation_group_key(class_id: ClassId, section_id: SectionId) -> String {
    format!("{}-{}", class_id, section_id)
}

/// Groups allocations by class section, keeping their input order within
/// each group.
pub fn group_allocations(allocations: Vec<TeacherSubjectAllocation>) -> GroupedAllocations {
    let mut grouped_allocations: BTreeMap<String, Vec<TeacherSubjectAllocation>> = BTreeMap::new();

    for allocation in allocations {
        grouped_allocations
            .entry(allocation_group_key(allocation.class_id, allocation.section_id))
            .or_default()
            .push(allocation);
    }

    GroupedAllocations {
        grouped_allocations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation(class_id: ClassId, section_id: SectionId, subject: &str) -> TeacherSubjectAllocation {
        TeacherSubjectAllocation {
            id: AllocationId::new(),
            teacher_id: TeacherId::new(),
            subject_id: SubjectId::new(),
            class_id,
            section_id,
            school_id: SchoolId::new(),
            teacher_name: "Grace Hopper".to_string(),
            teacher_image: DEFAULT_TEACHER_IMAGE.to_string(),
            subject_name: subject.to_string(),
            class_name: "JSS 1".to_string(),
            section_name: "A".to_string(),
            created_at: Utc::now(),
        }
    }

    fn teacher(department_id: Option<DepartmentId>) -> Teacher {
        Teacher {
            id: TeacherId::new(),
            title: None,
            first_name: "Kemi".to_string(),
            last_name: "Bello".to_string(),
            email: "kemi@school.test".to_string(),
            phone: None,
            whatsapp_no: None,
            gender: "Female".to_string(),
            dob: None,
            country: None,
            join_date: None,
            designation: None,
            qualification: None,
            years_of_experience: 0,
            nin: None,
            religion: None,
            department_id,
            department_name: None,
            address: None,
            image_url: None,
            employee_id: "TCH12345".to_string(),
            is_active: true,
            school_id: SchoolId::new(),
            school_name: None,
            user_id: UserId::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_attach_departments() {
        let sciences = DepartmentId::new();
        let departments = vec![BriefItem {
            id: sciences.into_inner(),
            name: "Sciences".to_string(),
        }];

        let listed = attach_departments(
            vec![teacher(Some(sciences)), teacher(None), teacher(Some(DepartmentId::new()))],
            departments,
        );

        assert_eq!(listed[0].department.as_ref().map(|d| d.name.as_str()), Some("Sciences"));
        assert!(listed[1].department.is_none());
        assert!(listed[2].department.is_none());

        let json = serde_json::to_value(&listed[0]).unwrap();
        assert_eq!(json["firstName"], "Kemi");
        assert_eq!(json["department"]["name"], "Sciences");
    }

    #[test]
    fn test_random_employee_id_format() {
        for _ in 0..200 {
            let id = random_employee_id();
            assert_eq!(id.len(), 8);
            assert!(id.starts_with("TCH"));
            assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
            let number: u32 = id[3..].parse().unwrap();
            assert!((10_000..=99_999).contains(&number));
        }
    }

    #[test]
    fn test_group_allocations_by_class_and_section() {
        let class_a = ClassId::new();
        let section_1 = SectionId::new();
        let section_2 = SectionId::new();

        let grouped = group_allocations(vec![
            allocation(class_a, section_1, "Maths"),
            allocation(class_a, section_2, "English"),
            allocation(class_a, section_1, "Physics"),
        ]);

        assert_eq!(grouped.grouped_allocations.len(), 2);
        let first = &grouped.grouped_allocations[&allocation_group_key(class_a, section_1)];
        let subjects: Vec<_> = first.iter().map(|a| a.subject_name.as_str()).collect();
        assert_eq!(subjects, vec!["Maths", "Physics"]);
    }

    #[test]
    fn test_group_key_format() {
        let class_id = ClassId::new();
        let section_id = SectionId::new();
        assert_eq!(
            allocation_group_key(class_id, section_id),
            format!("{}-{}", class_id.into_inner(), section_id.into_inner())
        );
    }

    #[test]
    fn test_grouped_allocations_serialize_camel_case() {
        let value = serde_json::to_value(group_allocations(vec![])).unwrap();
        assert_eq!(value, serde_json::json!({ "groupedAllocations": {} }));
    }

    #[test]
    fn test_years_of_experience_accepts_string() {
        let dto: CreateTeacherDto = serde_json::from_value(serde_json::json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@school.test",
            "gender": "FEMALE",
            "yearsOfExperience": "12",
            "NIN": "12345678901",
            "password": "secret123",
            "schoolId": "6f1b6a8e-1d4a-4c55-9a43-5a0f4c1f8e11"
        }))
        .unwrap();

        assert_eq!(dto.years_of_experience, 12);
        assert_eq!(dto.nin.as_deref(), Some("12345678901"));
    }
}
