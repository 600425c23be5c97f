//! Semester entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::SemesterId;

/// An academic semester.
///
/// The engine never decides which semester is "current"; callers select one
/// explicitly when browsing. The active flag exists for that selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,
    /// Unique semester code (e.g. `FALL2024`).
    pub semester_code: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}
