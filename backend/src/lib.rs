//! Course enrollment backend.
//!
//! Hexagonal layout: the `domain` module holds the entities, enrollment
//! rules, and ports; `inbound::http` adapts Actix requests onto the driving
//! ports; `outbound::persistence` implements the repository port over
//! PostgreSQL via Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use doc::ApiDoc;
pub use middleware::trace::Trace;
