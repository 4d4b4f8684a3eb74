//! Class, section, department and subject seeding.
//!
//! Slugs are unique across all schools, so every generated slug is suffixed
//! with the owning school's slug.

use schoolpro_core::generate_slug;
use schoolpro_models::ids::{ClassId, DepartmentId, SchoolId};
use sqlx::PgPool;
use std::time::Instant;

use super::models::{
    AcademicsPerSchool, ClassSeed, DepartmentSeed, SectionSeed, SubjectSeed,
};

const CLASS_TITLES: [&str; 6] = ["JSS 1", "JSS 2", "JSS 3", "SSS 1", "SSS 2", "SSS 3"];

const DEPARTMENTS: [&str; 4] = ["Sciences", "Humanities", "Languages", "Commercial"];

const SUBJECTS: [(&str, &str); 16] = [
    ("Mathematics", "MTH"),
    ("Physics", "PHY"),
    ("Chemistry", "CHM"),
    ("Biology", "BIO"),
    ("History", "HIS"),
    ("Government", "GOV"),
    ("Literature", "LIT"),
    ("Civic Education", "CIV"),
    ("English Language", "ENG"),
    ("French", "FRE"),
    ("Yoruba", "YOR"),
    ("Igbo", "IGB"),
    ("Economics", "ECO"),
    ("Accounting", "ACC"),
    ("Commerce", "COM"),
    ("Marketing", "MKT"),
];

fn scoped_slug(title: &str, school_slug: &str) -> String {
    let base = generate_slug(title).unwrap_or_else(|_| "item".to_string());
    format!("{}-{}", base, school_slug)
}

fn numbered(base: &str, index: usize, total_base: usize) -> String {
    if index < total_base {
        base.to_string()
    } else {
        format!("{} {}", base, index / total_base + 1)
    }
}

pub fn generate_classes(school_id: SchoolId, school_slug: &str, count: usize) -> Vec<ClassSeed> {
    (0..count)
        .map(|i| {
            let title = numbered(CLASS_TITLES[i % CLASS_TITLES.len()], i, CLASS_TITLES.len());
            ClassSeed {
                slug: scoped_slug(&title, school_slug),
                title,
                school_id,
            }
        })
        .collect()
}

/// Sections are lettered `A`, `B`, `C`... within a class.
pub fn generate_sections(
    class: &ClassSeed,
    class_id: ClassId,
    count: usize,
) -> Vec<SectionSeed> {
    (0..count)
        .map(|i| {
            let letter = (b'A' + (i % 26) as u8) as char;
            let title = if i < 26 {
                letter.to_string()
            } else {
                format!("{}{}", letter, i / 26 + 1)
            };

            SectionSeed {
                slug: format!("{}-{}", class.slug, title.to_lowercase()),
                title,
                class_id,
                school_id: class.school_id,
            }
        })
        .collect()
}

pub fn generate_departments(school_id: SchoolId, count: usize) -> Vec<DepartmentSeed> {
    (0..count)
        .map(|i| DepartmentSeed {
            name: numbered(DEPARTMENTS[i % DEPARTMENTS.len()], i, DEPARTMENTS.len()),
            budget: 500_000.0 + (i as f64) * 250_000.0,
            budget_year: "2024".to_string(),
            school_id,
        })
        .collect()
}

pub fn generate_subjects(
    department_id: DepartmentId,
    department_name: &str,
    department_index: usize,
    school_id: SchoolId,
    school_slug: &str,
    count: usize,
) -> Vec<SubjectSeed> {
    (0..count)
        .map(|i| {
            let offset = department_index * count + i;
            let (base, code) = SUBJECTS[offset % SUBJECTS.len()];
            let name = numbered(base, offset, SUBJECTS.len());

            SubjectSeed {
                slug: scoped_slug(&name, school_slug),
                code: format!("{}{}", code, 100 + offset),
                short_name: code.to_string(),
                name,
                department_id,
                department_name: department_name.to_string(),
                school_id,
            }
        })
        .collect()
}

/// Seeds the academic structure for each school.
pub async fn seed_academics(
    db: &PgPool,
    schools: &[(SchoolId, String)],
    config: &AcademicsPerSchool,
) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🏫 Seeding {} classes, {} sections/class, {} departments, {} subjects/department per school...",
        config.classes, config.sections_per_class, config.departments, config.subjects_per_department
    );

    let mut tx = db.begin().await?;
    let (mut classes, mut sections, mut departments, mut subjects) = (0, 0, 0, 0);

    for (school_id, school_slug) in schools {
        for class in generate_classes(*school_id, school_slug, config.classes) {
            let class_id = sqlx::query_scalar::<_, ClassId>(
                "INSERT INTO classes (title, slug, school_id) VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(&class.title)
            .bind(&class.slug)
            .bind(class.school_id)
            .fetch_one(&mut *tx)
            .await?;
            classes += 1;

            for section in generate_sections(&class, class_id, config.sections_per_class) {
                sqlx::query(
                    "INSERT INTO sections (title, slug, class_id, school_id) VALUES ($1, $2, $3, $4)",
                )
                .bind(&section.title)
                .bind(&section.slug)
                .bind(section.class_id)
                .bind(section.school_id)
                .execute(&mut *tx)
                .await?;
                sections += 1;
            }
        }

        for (index, department) in generate_departments(*school_id, config.departments)
            .into_iter()
            .enumerate()
        {
            // Department slugs are stored as given, so scope them the same way.
            let department_slug = format!("{} {}", department.name, school_slug);
            let department_id = sqlx::query_scalar::<_, DepartmentId>(
                "INSERT INTO departments (name, slug, budget, budget_year, school_id)
                 VALUES ($1, $2, $3, $4, $5) RETURNING id",
            )
            .bind(&department.name)
            .bind(&department_slug)
            .bind(department.budget)
            .bind(&department.budget_year)
            .bind(department.school_id)
            .fetch_one(&mut *tx)
            .await?;
            departments += 1;

            for subject in generate_subjects(
                department_id,
                &department.name,
                index,
                *school_id,
                school_slug,
                config.subjects_per_department,
            ) {
                sqlx::query(
                    "INSERT INTO subjects (name, slug, code, short_name, department_id, department_name, school_id)
                     VALUES ($1, $2, $3, $4, $5, $6, $7)",
                )
                .bind(&subject.name)
                .bind(&subject.slug)
                .bind(&subject.code)
                .bind(&subject.short_name)
                .bind(subject.department_id)
                .bind(&subject.department_name)
                .bind(subject.school_id)
                .execute(&mut *tx)
                .await?;
                subjects += 1;
            }
        }
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} classes, {} sections, {} departments, {} subjects in {:?}",
        classes,
        sections,
        departments,
        subjects,
        start_time.elapsed()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_class_slugs_are_scoped_to_school() {
        let a = generate_classes(SchoolId::new(), "seed-a-1", 3);
        let b = generate_classes(SchoolId::new(), "seed-b-2", 3);

        assert_eq!(a[0].title, "JSS 1");
        assert_eq!(a[0].slug, "jss-1-seed-a-1");
        assert_eq!(b[0].slug, "jss-1-seed-b-2");
    }

    #[test]
    fn test_class_titles_stay_unique_past_the_base_list() {
        let classes = generate_classes(SchoolId::new(), "seed-x-1", 8);
        let slugs: HashSet<_> = classes.iter().map(|c| c.slug.as_str()).collect();

        assert_eq!(slugs.len(), 8);
        assert_eq!(classes[6].title, "JSS 1 2");
    }

    #[test]
    fn test_sections_are_lettered() {
        let class = &generate_classes(SchoolId::new(), "seed-x-1", 1)[0];
        let sections = generate_sections(class, ClassId::new(), 3);

        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(sections[1].slug, "jss-1-seed-x-1-b");
    }

    #[test]
    fn test_subjects_do_not_repeat_across_departments() {
        let school_id = SchoolId::new();
        let mut slugs = HashSet::new();

        for index in 0..3 {
            for subject in
                generate_subjects(DepartmentId::new(), "Dept", index, school_id, "seed-x-1", 4)
            {
                assert!(slugs.insert(subject.slug));
            }
        }

        assert_eq!(slugs.len(), 12);
    }
}
