//! Fixed enrollment policy.
//!
//! These limits are global, not configurable per student or department.
//! Callers needing different policy must fork the decision logic rather than
//! parameterize these values.

/// Maximum credit load a student may carry in a semester.
pub const MAX_CREDITS_PER_SEMESTER: i32 = 21;

/// Maximum number of simultaneous course enrollments per semester.
pub const MAX_COURSES_PER_SEMESTER: i32 = 7;
