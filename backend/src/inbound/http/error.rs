//! HTTP status mapping for the domain error envelope.
//!
//! Keeps the domain free of transport concerns: the stable [`ErrorCode`] is
//! translated to a status code here, and internal errors are redacted before
//! they leave the process.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::{Error, ErrorCode};

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        // Business-rule rejections: the request was well-formed but conflicts
        // with the current enrollment state.
        ErrorCode::DepartmentMismatch
        | ErrorCode::LevelMismatch
        | ErrorCode::DuplicateEnrollment
        | ErrorCode::CourseFull
        | ErrorCode::CreditLimitExceeded
        | ErrorCode::CourseLimitExceeded => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code)
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        if matches!(self.code, ErrorCode::InternalError) {
            // Never leak stored failure details to clients.
            let mut redacted = self.clone();
            redacted.message = "Internal server error".to_owned();
            redacted.details = None;
            return builder.json(redacted);
        }
        builder.json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_expected_statuses() {
        let cases = [
            (ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST),
            (ErrorCode::Unauthorized, StatusCode::FORBIDDEN),
            (ErrorCode::NotFound, StatusCode::NOT_FOUND),
            (ErrorCode::DepartmentMismatch, StatusCode::CONFLICT),
            (ErrorCode::LevelMismatch, StatusCode::CONFLICT),
            (ErrorCode::DuplicateEnrollment, StatusCode::CONFLICT),
            (ErrorCode::CourseFull, StatusCode::CONFLICT),
            (ErrorCode::CreditLimitExceeded, StatusCode::CONFLICT),
            (ErrorCode::CourseLimitExceeded, StatusCode::CONFLICT),
            (ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in cases {
            assert_eq!(status_for(code), status, "{code:?}");
        }
    }

    #[test]
    fn internal_error_response_is_redacted() {
        let response = Error::internal("connection string leaked").error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = actix_web::body::to_bytes_limited(response.into_body(), 4096);
        let body = futures::executor::block_on(body)
            .expect("body within limit")
            .expect("body read");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value["message"], "Internal server error");
        assert!(value.get("details").is_none());
    }

    #[test]
    fn conflict_response_keeps_details() {
        let response = Error::credit_limit_exceeded(20, 3).error_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = actix_web::body::to_bytes_limited(response.into_body(), 4096);
        let body = futures::executor::block_on(body)
            .expect("body within limit")
            .expect("body read");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value["code"], "credit_limit_exceeded");
        assert_eq!(value["details"]["max"], 21);
    }
}
