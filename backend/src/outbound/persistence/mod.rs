//! PostgreSQL persistence via Diesel and diesel-async.

pub mod diesel_enrollment_repository;
pub mod error_mapping;
pub mod models;
pub mod pool;
pub mod schema;
pub mod seed;

pub use diesel_enrollment_repository::DieselEnrollmentRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
