//! Domain ports: driving use-case traits and the driven repository trait.

mod macros;

pub mod catalog_query;
pub mod enrollment_command;
pub mod enrollment_repository;

pub(crate) use macros::define_port_error;

pub use catalog_query::{
    AvailableCoursesRequest, CourseCatalogQuery, CourseView, StudentCourseSummary,
    StudentSummaryRequest,
};
#[cfg(test)]
pub use catalog_query::MockCourseCatalogQuery;
pub use enrollment_command::{
    DropCourseRequest, EnrollmentCommand, EnrollmentView, SelectCourseRequest,
};
#[cfg(test)]
pub use enrollment_command::MockEnrollmentCommand;
pub use enrollment_repository::{EnrollmentRepository, EnrollmentRepositoryError};
#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
