//! Driven port for enrollment persistence.
//!
//! The two mutating operations are deliberately composite: creating an
//! enrollment inserts the row AND increments the course counter, dropping one
//! deletes the row AND decrements it. Adapters must execute each pair as one
//! atomic, isolated unit so the counter can never diverge from the set of
//! live rows, even under concurrent calls against the same course. The
//! capacity gate is re-checked inside that unit; a lost race surfaces as
//! [`EnrollmentRepositoryError::CapacityExhausted`] or
//! [`EnrollmentRepositoryError::AlreadyEnrolled`] rather than a partial write.

use async_trait::async_trait;

use crate::domain::{
    Course, CourseId, EnrolledCourse, Enrollment, EnrollmentId, SemesterId, Student, StudentId,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by enrollment repository adapters.
    pub enum EnrollmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "enrollment store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "enrollment store query failed: {message}",
        /// The guarded counter increment found the course already full.
        CapacityExhausted =>
            "course capacity exhausted",
        /// The unique (student, course) index rejected a concurrent duplicate.
        AlreadyEnrolled =>
            "an enrollment already exists for this student and course",
    }
}

/// Port for reading entities and executing the atomic enrollment mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Look up a student by id.
    async fn find_student(
        &self,
        id: StudentId,
    ) -> Result<Option<Student>, EnrollmentRepositoryError>;

    /// Look up a course by id, including its live counter.
    async fn find_course(&self, id: CourseId)
        -> Result<Option<Course>, EnrollmentRepositoryError>;

    /// Look up an enrollment by id.
    async fn find_enrollment(
        &self,
        id: EnrollmentId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError>;

    /// Whether a live enrollment links this student and course.
    async fn is_enrolled(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<bool, EnrollmentRepositoryError>;

    /// All live enrollments of a student joined with their courses, ordered
    /// by course code.
    async fn enrollments_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<EnrolledCourse>, EnrollmentRepositoryError>;

    /// Courses matching department, year level, and semester, ordered by
    /// course code. An empty result is not an error.
    async fn available_courses(
        &self,
        department: &str,
        year: i32,
        semester_id: SemesterId,
    ) -> Result<Vec<Course>, EnrollmentRepositoryError>;

    /// Atomically insert an `ENROLLED` row and take one seat on the course.
    async fn create_enrollment(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Enrollment, EnrollmentRepositoryError>;

    /// Atomically delete the enrollment row and release one seat on the
    /// course (floored at zero). Deleting an already-removed row is a no-op
    /// that must not touch the counter.
    async fn delete_enrollment(
        &self,
        enrollment_id: EnrollmentId,
        course_id: CourseId,
    ) -> Result<(), EnrollmentRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_formats_message() {
        let err = EnrollmentRepositoryError::query("broken sql");
        assert!(err.to_string().contains("broken sql"));
    }

    #[test]
    fn race_variants_have_stable_messages() {
        assert_eq!(
            EnrollmentRepositoryError::capacity_exhausted().to_string(),
            "course capacity exhausted"
        );
        assert!(EnrollmentRepositoryError::already_enrolled()
            .to_string()
            .contains("already exists"));
    }
}
