//! Shared HTTP adapter state.

use std::sync::Arc;

use crate::domain::ports::{CourseCatalogQuery, EnrollmentCommand};

/// Dependency bundle for HTTP handlers.
///
/// Handlers receive this via `actix_web::web::Data` and only see the domain
/// ports, never the concrete service or its repository.
#[derive(Clone)]
pub struct HttpState {
    pub enrollment: Arc<dyn EnrollmentCommand>,
    pub catalog: Arc<dyn CourseCatalogQuery>,
}

impl HttpState {
    /// Bundle the two driving ports for the HTTP layer.
    pub fn new(enrollment: Arc<dyn EnrollmentCommand>, catalog: Arc<dyn CourseCatalogQuery>) -> Self {
        Self {
            enrollment,
            catalog,
        }
    }
}
