//! Student entity.

use serde::{Deserialize, Serialize};

use super::ids::StudentId;

/// A registered student.
///
/// Students are created at seeding/admin time and are immutable during
/// enrollment operations; only their set of enrollments changes. The `pin` is
/// an authentication secret consumed by the (out of scope) login flow and is
/// never exposed through any view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    /// External student code, unique (e.g. `STU001`).
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    /// Year level the student is in, positive.
    pub year: i32,
    pub pin: String,
}

impl Student {
    /// Full display name, first name then last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
