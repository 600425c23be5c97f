//! Enrollment domain: entities, policy, error taxonomy, ports, and services.
//!
//! Everything in here is transport and persistence agnostic. Inbound
//! adapters translate the [`Error`] envelope to HTTP responses; outbound
//! adapters implement the [`ports`] traits over PostgreSQL.

pub mod course;
pub mod enrollment;
pub mod enrollment_service;
pub mod error;
pub mod ids;
pub mod policy;
pub mod ports;
pub mod semester;
pub mod student;

pub use self::course::{Course, CourseDraft, CourseValidationError};
pub use self::enrollment::{EnrolledCourse, Enrollment, EnrollmentStatus, UnknownEnrollmentStatus};
pub use self::enrollment_service::EnrollmentService;
pub use self::error::{Error, ErrorCode};
pub use self::ids::{CourseId, EnrollmentId, SemesterId, StudentId};
pub use self::policy::{MAX_COURSES_PER_SEMESTER, MAX_CREDITS_PER_SEMESTER};
pub use self::semester::Semester;
pub use self::student::Student;

/// Convenient result alias for operations returning the domain [`Error`].
pub type ApiResult<T> = Result<T, Error>;
