//! # SchoolPro Models
//!
//! Domain models and DTOs for the SchoolPro API.
//!
//! This crate holds the database rows, request payloads and the few pure
//! domain helpers that do not need storage (employee id format,
//! registration-sequence parsing, allocation grouping).
//!
//! # Modules
//!
//! - [`analytics`]: Per-school counts and brief `{id, name}` rows
//! - [`auth`]: Login payloads and refresh tokens
//! - [`classes`]: Classes and sections
//! - [`contacts`]: Contact leads
//! - [`departments`]: Departments with their teachers and subjects
//! - [`ids`]: Typed entity ids
//! - [`parents`]: Parent profiles
//! - [`roles`]: The `UserRole` enum
//! - [`schools`]: Schools
//! - [`students`]: Student profiles and registration numbers
//! - [`subjects`]: Subjects
//! - [`teachers`]: Teacher profiles and subject allocations
//! - [`users`]: User accounts
//!
//! # Example
//!
//! ```ignore
//! use schoolpro_models::teachers::{group_allocations, TeacherSubjectAllocation};
//!
//! let grouped = group_allocations(allocations);
//! for (key, items) in &grouped.grouped_allocations {
//!     println!("{key}: {} subjects", items.len());
//! }
//! ```

pub mod analytics;
pub mod auth;
pub mod classes;
pub mod contacts;
pub mod departments;
pub mod ids;
pub mod parents;
pub mod roles;
pub mod schools;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use analytics::{AnalyticsItem, BriefItem, SchoolCounts};
pub use auth::{LoginRequest, LoginResponse, RefreshToken};
pub use classes::{
    Class, ClassWithSections, CreateClassDto, CreateSectionDto, Section, SectionWithCount,
};
pub use contacts::{Contact, CreateContactDto};
pub use departments::{
    CreateDepartmentDto, Department, DepartmentSubject, DepartmentTeacher, DepartmentWithRelations,
};
pub use parents::{CreateParentDto, Parent};
pub use roles::UserRole;
pub use schools::{CreateSchoolDto, School};
pub use students::{CreateStudentDto, Student, next_sequence};
pub use subjects::{CreateSubjectDto, Subject};
pub use teachers::{
    AllocateSubjectsDto, AllocationItem, CreateTeacherDto, GroupedAllocations, Teacher,
    TeacherSubjectAllocation, TeacherWithDepartment, attach_departments, group_allocations,
};
pub use users::{CreateUserDto, User};
