//! Enrollment entity linking a student to a course.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::course::Course;
use super::ids::{CourseId, EnrollmentId, StudentId};

/// Lifecycle status of an enrollment.
///
/// Only one value exists: dropping a course deletes the row outright, so
/// there is no `DROPPED` or `WAITLISTED` state to represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Enrolled,
}

impl EnrollmentStatus {
    /// Database/wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enrolled => "ENROLLED",
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = UnknownEnrollmentStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENROLLED" => Ok(Self::Enrolled),
            other => Err(UnknownEnrollmentStatus(other.to_owned())),
        }
    }
}

/// Raised when a stored status string is not a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown enrollment status {0:?}")]
pub struct UnknownEnrollmentStatus(pub String);

/// An active registration of one student in one course.
///
/// At most one enrollment exists per (student, course) pair at any time;
/// the store enforces this with a unique index and the decision engine
/// checks it up front to report the violation as a domain error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub status: EnrollmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An enrollment joined with the course it references, as read back for
/// credit accounting and the summary projection.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledCourse {
    pub enrollment: Enrollment,
    pub course: Course,
}
