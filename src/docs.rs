use utoipa::OpenApi;

use schoolpro_models::{
    AllocateSubjectsDto, AllocationItem, AnalyticsItem, BriefItem, Class, ClassWithSections,
    Contact, CreateClassDto, CreateContactDto, CreateDepartmentDto, CreateParentDto,
    CreateSchoolDto, CreateSectionDto, CreateStudentDto, CreateSubjectDto, CreateTeacherDto,
    CreateUserDto, Department, DepartmentSubject, DepartmentTeacher, DepartmentWithRelations,
    GroupedAllocations, LoginRequest, LoginResponse, Parent, School, Section, SectionWithCount,
    Student, Subject, Teacher, TeacherSubjectAllocation, TeacherWithDepartment, User, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::create_user,
        crate::modules::auth::controller::login_user,
        crate::modules::schools::controller::create_school,
        crate::modules::schools::controller::get_all_schools,
        crate::modules::schools::controller::get_school,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_students_by_school,
        crate::modules::students::controller::get_next_sequence,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teachers_by_school,
        crate::modules::teachers::controller::allocate_subjects,
        crate::modules::teachers::controller::get_allocations,
        crate::modules::teachers::controller::get_allocations_by_school,
        crate::modules::parents::controller::create_parent,
        crate::modules::parents::controller::get_parents,
        crate::modules::parents::controller::get_parents_by_school,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_classes_by_school,
        crate::modules::classes::controller::create_section,
        crate::modules::classes::controller::get_sections,
        crate::modules::departments::controller::create_department,
        crate::modules::departments::controller::get_departments,
        crate::modules::departments::controller::get_departments_by_school,
        crate::modules::departments::controller::get_brief_departments,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::get_subjects_by_school,
        crate::modules::subjects::controller::get_brief_subjects,
        crate::modules::analytics::controller::get_school_analytics,
        crate::modules::contacts::controller::create_contact,
        crate::modules::contacts::controller::get_contacts,
    ),
    components(
        schemas(
            User,
            UserRole,
            CreateUserDto,
            LoginRequest,
            LoginResponse,
            School,
            CreateSchoolDto,
            Student,
            CreateStudentDto,
            Teacher,
            TeacherWithDepartment,
            CreateTeacherDto,
            TeacherSubjectAllocation,
            AllocationItem,
            AllocateSubjectsDto,
            GroupedAllocations,
            Parent,
            CreateParentDto,
            Class,
            CreateClassDto,
            ClassWithSections,
            Section,
            CreateSectionDto,
            SectionWithCount,
            Department,
            CreateDepartmentDto,
            DepartmentWithRelations,
            DepartmentTeacher,
            DepartmentSubject,
            Subject,
            CreateSubjectDto,
            AnalyticsItem,
            BriefItem,
            Contact,
            CreateContactDto,
        )
    ),
    tags(
        (name = "Users", description = "User account creation"),
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Schools", description = "School registration"),
        (name = "Students", description = "Student profiles and registration numbers"),
        (name = "Teachers", description = "Teacher profiles and subject allocations"),
        (name = "Parents", description = "Parent profiles"),
        (name = "Classes", description = "Classes and sections"),
        (name = "Departments", description = "Departments"),
        (name = "Subjects", description = "Subjects"),
        (name = "Analytics", description = "Dashboard counts"),
        (name = "Contacts", description = "Contact requests from the public site")
    ),
    info(
        title = "SchoolPro API",
        version = "0.1.0",
        description = "REST backend for the SchoolPro school-management platform"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_versioned_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/login"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/teachers/allocations"));
        assert!(paths.iter().all(|p| p.starts_with("/api/v1/")));
    }
}
