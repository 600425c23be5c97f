//! Catalog browsing and summary HTTP handlers.
//!
//! ```text
//! GET /api/v1/students/{student_id}/available-courses?semesterId=1
//! GET /api/v1/students/{student_id}/summary?semesterId=1
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::ports::{
    AvailableCoursesRequest, CourseView, StudentCourseSummary, StudentSummaryRequest,
};
use crate::domain::{Error, SemesterId, StudentId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Query parameters selecting the semester.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SemesterQuery {
    /// Semester the caller is browsing.
    pub semester_id: SemesterId,
}

/// Courses the student may enroll in for the given semester.
#[utoipa::path(
    get,
    path = "/api/v1/students/{student_id}/available-courses",
    params(
        ("student_id" = i64, Path, description = "Student primary key"),
        SemesterQuery,
    ),
    responses(
        (status = 200, description = "Matching courses, possibly empty", body = [CourseView]),
        (status = 404, description = "Student not found", body = Error),
        (status = 503, description = "Enrollment store unavailable", body = Error)
    ),
    tags = ["catalog"],
    operation_id = "availableCourses"
)]
#[get("/students/{student_id}/available-courses")]
pub async fn available_courses(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<SemesterQuery>,
) -> ApiResult<web::Json<Vec<CourseView>>> {
    let courses = state
        .catalog
        .available_courses(AvailableCoursesRequest {
            student_id: StudentId::new(path.into_inner()),
            semester_id: query.semester_id,
        })
        .await?;

    Ok(web::Json(courses))
}

/// Aggregated view of the student's live enrollments.
#[utoipa::path(
    get,
    path = "/api/v1/students/{student_id}/summary",
    params(
        ("student_id" = i64, Path, description = "Student primary key"),
        SemesterQuery,
    ),
    responses(
        (status = 200, description = "Enrollment summary", body = StudentCourseSummary),
        (status = 404, description = "Student not found", body = Error),
        (status = 503, description = "Enrollment store unavailable", body = Error)
    ),
    tags = ["catalog"],
    operation_id = "studentSummary"
)]
#[get("/students/{student_id}/summary")]
pub async fn student_summary(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<SemesterQuery>,
) -> ApiResult<web::Json<StudentCourseSummary>> {
    let summary = state
        .catalog
        .student_summary(StudentSummaryRequest {
            student_id: StudentId::new(path.into_inner()),
            semester_id: query.semester_id,
        })
        .await?;

    Ok(web::Json(summary))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
