//! Enrollment HTTP handlers.
//!
//! ```text
//! POST   /api/v1/students/{student_id}/enrollments
//! DELETE /api/v1/students/{student_id}/enrollments/{enrollment_id}
//! ```

use actix_web::{delete, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{DropCourseRequest, EnrollmentView, SelectCourseRequest};
use crate::domain::{CourseId, EnrollmentId, Error, StudentId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Request payload for enrolling in a course.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectCourseBody {
    pub course_id: CourseId,
}

/// Enroll the student in a course.
#[utoipa::path(
    post,
    path = "/api/v1/students/{student_id}/enrollments",
    request_body = SelectCourseBody,
    params(
        ("student_id" = i64, Path, description = "Student primary key"),
    ),
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentView),
        (status = 404, description = "Student or course not found", body = Error),
        (status = 409, description = "Enrollment rule rejected the request", body = Error),
        (status = 503, description = "Enrollment store unavailable", body = Error)
    ),
    tags = ["enrollments"],
    operation_id = "selectCourse"
)]
#[post("/students/{student_id}/enrollments")]
pub async fn select_course(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<SelectCourseBody>,
) -> ApiResult<HttpResponse> {
    let student_id = StudentId::new(path.into_inner());
    let view = state
        .enrollment
        .select_course(SelectCourseRequest {
            student_id,
            course_id: payload.course_id,
        })
        .await?;

    Ok(HttpResponse::Created().json(view))
}

/// Drop one of the student's own enrollments.
#[utoipa::path(
    delete,
    path = "/api/v1/students/{student_id}/enrollments/{enrollment_id}",
    params(
        ("student_id" = i64, Path, description = "Student primary key"),
        ("enrollment_id" = i64, Path, description = "Enrollment primary key"),
    ),
    responses(
        (status = 204, description = "Enrollment removed"),
        (status = 403, description = "Enrollment belongs to another student", body = Error),
        (status = 404, description = "Enrollment not found", body = Error),
        (status = 503, description = "Enrollment store unavailable", body = Error)
    ),
    tags = ["enrollments"],
    operation_id = "dropCourse"
)]
#[delete("/students/{student_id}/enrollments/{enrollment_id}")]
pub async fn drop_course(
    state: web::Data<HttpState>,
    path: web::Path<(i64, i64)>,
) -> ApiResult<HttpResponse> {
    let (student_id, enrollment_id) = path.into_inner();
    state
        .enrollment
        .drop_course(DropCourseRequest {
            student_id: StudentId::new(student_id),
            enrollment_id: EnrollmentId::new(enrollment_id),
        })
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "enrollments_tests.rs"]
mod tests;
