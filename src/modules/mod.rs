pub mod analytics;
pub mod auth;
pub mod classes;
pub mod contacts;
pub mod departments;
pub mod parents;
pub mod schools;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;
