//! HTTP adapter: handlers, shared state, and the error-to-status mapping.
//!
//! Handlers depend only on the domain ports through [`state::HttpState`], so
//! they are tested against mocks without a database.

use actix_web::web;

pub mod catalog;
pub mod enrollments;
pub mod error;
pub mod health;
pub mod state;

pub use crate::domain::ApiResult;
pub use state::HttpState;

/// Register every versioned API route under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(catalog::available_courses)
            .service(catalog::student_summary)
            .service(enrollments::select_course)
            .service(enrollments::drop_course),
    );
}
