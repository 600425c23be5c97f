//! Diesel and pool error mapping for the enrollment repository.

use tracing::debug;

use crate::domain::ports::EnrollmentRepositoryError;

use super::pool::PoolError;

/// Map pool errors onto the repository's connection variant.
pub(super) fn map_pool_error(error: PoolError) -> EnrollmentRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    EnrollmentRepositoryError::connection(message)
}

/// Map Diesel errors onto the repository error taxonomy.
///
/// A unique violation can only come from the `(student_id, course_id)` index
/// on `enrollments` during normal operation, so it maps to the duplicate
/// variant the service understands.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> EnrollmentRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            EnrollmentRepositoryError::already_enrolled()
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EnrollmentRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => EnrollmentRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            EnrollmentRepositoryError::query("database query error")
        }
        _ => EnrollmentRepositoryError::query("database error"),
    }
}

// Lets `?` forward Diesel failures out of transaction closures.
impl From<diesel::result::Error> for EnrollmentRepositoryError {
    fn from(error: diesel::result::Error) -> Self {
        map_diesel_error(error)
    }
}
