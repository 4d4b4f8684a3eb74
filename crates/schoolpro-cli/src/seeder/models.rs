//! Data models for database seeding configuration.

use schoolpro_models::ids::{ClassId, DepartmentId, SchoolId};

/// Seed data for creating a school.
pub struct SchoolSeed {
    pub name: String,
    pub slug: String,
}

/// Seed data for creating a class.
pub struct ClassSeed {
    pub title: String,
    pub slug: String,
    pub school_id: SchoolId,
}

/// Seed data for creating a section of a class.
pub struct SectionSeed {
    pub title: String,
    pub slug: String,
    pub class_id: ClassId,
    pub school_id: SchoolId,
}

/// Seed data for creating a department.
pub struct DepartmentSeed {
    pub name: String,
    pub budget: f64,
    pub budget_year: String,
    pub school_id: SchoolId,
}

/// Seed data for creating a subject.
pub struct SubjectSeed {
    pub name: String,
    pub slug: String,
    pub code: String,
    pub short_name: String,
    pub department_id: DepartmentId,
    pub department_name: String,
    pub school_id: SchoolId,
}

/// Academic structure generated for every school.
#[derive(Clone)]
pub struct AcademicsPerSchool {
    pub classes: usize,
    pub sections_per_class: usize,
    pub departments: usize,
    pub subjects_per_department: usize,
}

impl Default for AcademicsPerSchool {
    fn default() -> Self {
        Self {
            classes: 6,            // e.g., JSS 1 - SSS 3
            sections_per_class: 3, // e.g., A, B, C
            departments: 3,
            subjects_per_department: 4,
        }
    }
}

/// Complete configuration for database seeding.
#[derive(Clone, Default)]
pub struct SeedConfig {
    pub num_schools: usize,
    pub academics: AcademicsPerSchool,
}

impl SeedConfig {
    pub fn new(num_schools: usize) -> Self {
        Self {
            num_schools,
            ..Default::default()
        }
    }

    pub fn with_academics(mut self, academics: AcademicsPerSchool) -> Self {
        self.academics = academics;
        self
    }

    pub fn total_sections_per_school(&self) -> usize {
        self.academics.classes * self.academics.sections_per_class
    }

    pub fn total_subjects_per_school(&self) -> usize {
        self.academics.departments * self.academics.subjects_per_department
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_config_totals() {
        let config = SeedConfig::new(2).with_academics(AcademicsPerSchool {
            classes: 4,
            sections_per_class: 2,
            departments: 3,
            subjects_per_department: 5,
        });

        assert_eq!(config.num_schools, 2);
        assert_eq!(config.total_sections_per_school(), 8);
        assert_eq!(config.total_subjects_per_school(), 15);
    }
}
