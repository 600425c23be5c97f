//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering the enrollment
//! and catalog endpoints plus the health probes. Swagger UI serves it in
//! debug builds under `/docs`.

use utoipa::OpenApi;

use crate::domain::ports::{CourseView, EnrollmentView, StudentCourseSummary};
use crate::domain::{EnrollmentStatus, Error, ErrorCode};
use crate::inbound::http::enrollments::SelectCourseBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Enrollment backend API",
        description = "HTTP interface for course browsing, enrollment, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::catalog::available_courses,
        crate::inbound::http::catalog::student_summary,
        crate::inbound::http::enrollments::select_course,
        crate::inbound::http::enrollments::drop_course,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        EnrollmentStatus,
        EnrollmentView,
        CourseView,
        StudentCourseSummary,
        SelectCourseBody,
    )),
    tags(
        (name = "catalog", description = "Course browsing and enrollment summaries"),
        (name = "enrollments", description = "Enrollment and drop operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
