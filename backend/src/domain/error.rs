//! Error envelope returned by every operation.
//!
//! The taxonomy is caller-facing and recoverable at the request boundary;
//! nothing here is process-fatal. The engine never retries or swallows these
//! errors, and every failure aborts its operation with zero side effects.
//! Inbound adapters map the stable [`ErrorCode`] to a transport status.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::domain::policy::{MAX_COURSES_PER_SEMESTER, MAX_CREDITS_PER_SEMESTER};
use crate::middleware::trace::TraceId;

/// Stable machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The caller does not own the resource it tries to mutate.
    Unauthorized,
    /// The requested entity does not exist.
    NotFound,
    /// The course belongs to a different department than the student.
    DepartmentMismatch,
    /// The course targets a different year level than the student's.
    LevelMismatch,
    /// The student is already enrolled in this course.
    DuplicateEnrollment,
    /// The course has reached its capacity.
    CourseFull,
    /// Enrolling would push the student past the semester credit limit.
    CreditLimitExceeded,
    /// The student already carries the maximum number of courses.
    CourseLimitExceeded,
    /// A required collaborator (e.g. the store) is unavailable.
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    InternalError,
}

/// Error response payload.
///
/// # Examples
/// ```
/// use enrollment_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Student not found with id: 9");
/// assert_eq!(err.code, ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Error {
    /// Stable machine-readable error code.
    #[schema(example = "course_full")]
    pub code: ErrorCode,
    /// Human-readable error message.
    #[schema(example = "Course is full. Cannot enroll more students")]
    pub message: String,
    /// Correlation identifier for tracing this error across systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Supplementary structured details, e.g. the limit figures behind a
    /// `credit_limit_exceeded` rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the current trace identifier if one is
    /// in scope so the payload is correlated automatically.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// The course sits in another department.
    pub fn department_mismatch() -> Self {
        Self::new(
            ErrorCode::DepartmentMismatch,
            "Course is not available for your department",
        )
    }

    /// The course targets another year level.
    pub fn level_mismatch() -> Self {
        Self::new(
            ErrorCode::LevelMismatch,
            "Course is not available for your year level",
        )
    }

    /// The student already holds a live enrollment for this course.
    pub fn duplicate_enrollment() -> Self {
        Self::new(
            ErrorCode::DuplicateEnrollment,
            "You are already enrolled in this course",
        )
    }

    /// The course counter has reached capacity.
    pub fn course_full() -> Self {
        Self::new(
            ErrorCode::CourseFull,
            "Course is full. Cannot enroll more students",
        )
    }

    /// Enrolling would exceed the semester credit limit.
    ///
    /// Details carry the current load, the attempted course credits, and the
    /// fixed maximum.
    pub fn credit_limit_exceeded(current: i32, attempted: i32) -> Self {
        Self::new(
            ErrorCode::CreditLimitExceeded,
            format!(
                "Credit limit exceeded. Maximum {MAX_CREDITS_PER_SEMESTER} credits allowed \
                 per semester. You currently have {current} credits"
            ),
        )
        .with_details(json!({
            "current": current,
            "attempted": attempted,
            "max": MAX_CREDITS_PER_SEMESTER,
        }))
    }

    /// The student already carries the maximum number of courses.
    pub fn course_limit_exceeded(current: usize) -> Self {
        Self::new(
            ErrorCode::CourseLimitExceeded,
            format!(
                "Course limit exceeded. Maximum {MAX_COURSES_PER_SEMESTER} courses allowed \
                 per semester"
            ),
        )
        .with_details(json!({
            "current": current,
            "max": MAX_COURSES_PER_SEMESTER,
        }))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Tests for the error payload and its constructors.

    use super::*;

    #[test]
    fn domain_constructors_set_codes_and_messages() {
        let cases = [
            (Error::department_mismatch(), ErrorCode::DepartmentMismatch),
            (Error::level_mismatch(), ErrorCode::LevelMismatch),
            (Error::duplicate_enrollment(), ErrorCode::DuplicateEnrollment),
            (Error::course_full(), ErrorCode::CourseFull),
        ];
        for (err, code) in cases {
            assert_eq!(err.code, code);
            assert!(!err.message.is_empty());
        }
    }

    #[test]
    fn credit_limit_details_carry_figures() {
        let err = Error::credit_limit_exceeded(20, 3);
        assert_eq!(err.code, ErrorCode::CreditLimitExceeded);
        assert!(err.message.contains("20 credits"));
        let details = err.details.expect("details attached");
        assert_eq!(details["current"], 20);
        assert_eq!(details["attempted"], 3);
        assert_eq!(details["max"], MAX_CREDITS_PER_SEMESTER);
    }

    #[test]
    fn course_limit_details_carry_figures() {
        let err = Error::course_limit_exceeded(7);
        let details = err.details.expect("details attached");
        assert_eq!(details["current"], 7);
        assert_eq!(details["max"], MAX_COURSES_PER_SEMESTER);
    }

    #[test]
    fn trace_id_absent_outside_request_scope() {
        let err = Error::internal("boom");
        assert!(err.trace_id.is_none());
    }

    #[tokio::test]
    async fn trace_id_captured_when_in_scope() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("valid UUID");
        let expected = trace_id.to_string();
        let error = TraceId::scope(trace_id, async move { Error::course_full() }).await;
        assert_eq!(error.trace_id.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn serializes_snake_case_codes() {
        let err = Error::duplicate_enrollment();
        let value = serde_json::to_value(&err).expect("serialize error");
        assert_eq!(value["code"], "duplicate_enrollment");
    }
}
