//! Driving port for catalog browsing and the enrollment summary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::policy::{MAX_COURSES_PER_SEMESTER, MAX_CREDITS_PER_SEMESTER};
use crate::domain::{Course, CourseId, Error, SemesterId, Student, StudentId};

use super::enrollment_command::EnrollmentView;

/// Request to list the courses a student may browse for a semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCoursesRequest {
    pub student_id: StudentId,
    pub semester_id: SemesterId,
}

/// Request for a student's enrollment summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummaryRequest {
    pub student_id: StudentId,
    /// Accepted for interface stability; the summary aggregates the
    /// student's enrollments across all semesters (see `student_summary`).
    pub semester_id: SemesterId,
}

/// Course projection for browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseView {
    pub id: CourseId,
    pub course_code: String,
    pub course_name: String,
    pub department: String,
    pub level: i32,
    pub credits: i32,
    pub max_capacity: i32,
    pub current_enrollment: i32,
    pub seats_remaining: i32,
    pub instructor: String,
    pub description: String,
    pub semester_id: SemesterId,
}

impl From<Course> for CourseView {
    fn from(course: Course) -> Self {
        Self {
            id: course.id(),
            course_code: course.course_code().to_owned(),
            course_name: course.course_name().to_owned(),
            department: course.department().to_owned(),
            level: course.level(),
            credits: course.credits(),
            max_capacity: course.max_capacity(),
            current_enrollment: course.current_enrollment(),
            seats_remaining: course.seats_remaining(),
            instructor: course.instructor().to_owned(),
            description: course.description().to_owned(),
            semester_id: course.semester_id(),
        }
    }
}

/// Aggregated reporting view over a student's live enrollments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentCourseSummary {
    pub student_id: StudentId,
    pub student_name: String,
    pub department: String,
    pub year: i32,
    pub enrolled_course_count: i32,
    pub total_credits: i32,
    pub max_credits_per_semester: i32,
    pub max_courses_per_semester: i32,
    pub enrolled_courses: Vec<EnrollmentView>,
}

impl StudentCourseSummary {
    /// Assemble the summary for a student from their enrollment views.
    pub fn assemble(
        student: &Student,
        total_credits: i32,
        enrolled_courses: Vec<EnrollmentView>,
    ) -> Self {
        Self {
            student_id: student.id,
            student_name: student.full_name(),
            department: student.department.clone(),
            year: student.year,
            enrolled_course_count: enrolled_courses.len() as i32,
            total_credits,
            max_credits_per_semester: MAX_CREDITS_PER_SEMESTER,
            max_courses_per_semester: MAX_COURSES_PER_SEMESTER,
            enrolled_courses,
        }
    }
}

/// Driving port for the read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalogQuery: Send + Sync {
    /// Courses the student may browse: same department, same year level,
    /// the requested semester. Ordered by course code; an empty list is a
    /// valid answer, never an error.
    async fn available_courses(
        &self,
        request: AvailableCoursesRequest,
    ) -> Result<Vec<CourseView>, Error>;

    /// Aggregate the student's live enrollments into a reporting view.
    ///
    /// The semester id is accepted but does not scope the aggregation; the
    /// summary spans every live enrollment the student holds.
    async fn student_summary(
        &self,
        request: StudentSummaryRequest,
    ) -> Result<StudentCourseSummary, Error>;
}
