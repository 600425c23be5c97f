//! Driving port for enrollment mutations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Course, CourseId, Enrollment, EnrollmentId, EnrollmentStatus, Error, Student, StudentId,
};

/// Request to enroll a student in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectCourseRequest {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

/// Request to drop an enrollment on behalf of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropCourseRequest {
    pub student_id: StudentId,
    pub enrollment_id: EnrollmentId,
}

/// Projection of one enrollment composed from entity fields.
///
/// Nothing here is persisted as such; the view is rebuilt from the student,
/// course, and enrollment records on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentView {
    pub enrollment_id: EnrollmentId,
    pub student_id: StudentId,
    pub student_name: String,
    pub student_code: String,
    pub course_id: CourseId,
    pub course_code: String,
    pub course_name: String,
    pub status: EnrollmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EnrollmentView {
    /// Compose the view from its three entities.
    pub fn compose(enrollment: &Enrollment, student: &Student, course: &Course) -> Self {
        Self {
            enrollment_id: enrollment.id,
            student_id: student.id,
            student_name: student.full_name(),
            student_code: student.student_code.clone(),
            course_id: course.id(),
            course_code: course.course_code().to_owned(),
            course_name: course.course_name().to_owned(),
            status: enrollment.status,
            created_at: enrollment.created_at,
            updated_at: enrollment.updated_at,
        }
    }
}

/// Driving port for the enrollment decision engine's write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentCommand: Send + Sync {
    /// Validate and execute an enrollment, returning its projection.
    ///
    /// Validation order matches the engine contract: student lookup, course
    /// lookup, department match, level match, duplicate check, capacity,
    /// credit limit, course-count limit.
    async fn select_course(&self, request: SelectCourseRequest) -> Result<EnrollmentView, Error>;

    /// Drop an enrollment owned by the requesting student. The row is deleted
    /// permanently; no history is kept.
    async fn drop_course(&self, request: DropCourseRequest) -> Result<(), Error>;
}
