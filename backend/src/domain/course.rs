//! Course entity with its enrollment counter.
//!
//! The counter on a course is the single source of truth for capacity. It
//! must stay within `0..=max_capacity` and consistent with the number of live
//! enrollment rows referencing the course; the repository port's atomic
//! operations carry that responsibility under concurrency, while
//! [`Course::take_seat`] and [`Course::release_seat`] express the same rules
//! for in-process state.

use serde::{Deserialize, Serialize};

use super::ids::{CourseId, SemesterId};

/// Input payload for [`Course::new`].
#[derive(Debug, Clone)]
pub struct CourseDraft {
    pub id: CourseId,
    pub course_code: String,
    pub course_name: String,
    pub department: String,
    pub level: i32,
    pub credits: i32,
    pub max_capacity: i32,
    pub current_enrollment: i32,
    pub instructor: String,
    pub description: String,
    pub semester_id: SemesterId,
}

/// Validation errors raised by [`Course::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseValidationError {
    #[error("course credits must be positive, got {0}")]
    NonPositiveCredits(i32),
    #[error("course capacity must be positive, got {0}")]
    NonPositiveCapacity(i32),
    #[error("enrollment counter {counter} outside 0..={capacity}")]
    CounterOutOfRange { counter: i32, capacity: i32 },
}

/// A course offered in one semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    course_code: String,
    course_name: String,
    department: String,
    level: i32,
    credits: i32,
    max_capacity: i32,
    current_enrollment: i32,
    instructor: String,
    description: String,
    semester_id: SemesterId,
}

impl Course {
    /// Create a validated course.
    pub fn new(draft: CourseDraft) -> Result<Self, CourseValidationError> {
        if draft.credits <= 0 {
            return Err(CourseValidationError::NonPositiveCredits(draft.credits));
        }
        if draft.max_capacity <= 0 {
            return Err(CourseValidationError::NonPositiveCapacity(
                draft.max_capacity,
            ));
        }
        if draft.current_enrollment < 0 || draft.current_enrollment > draft.max_capacity {
            return Err(CourseValidationError::CounterOutOfRange {
                counter: draft.current_enrollment,
                capacity: draft.max_capacity,
            });
        }
        Ok(Self {
            id: draft.id,
            course_code: draft.course_code,
            course_name: draft.course_name,
            department: draft.department,
            level: draft.level,
            credits: draft.credits,
            max_capacity: draft.max_capacity,
            current_enrollment: draft.current_enrollment,
            instructor: draft.instructor,
            description: draft.description,
            semester_id: draft.semester_id,
        })
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Year level the course targets.
    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }

    pub fn max_capacity(&self) -> i32 {
        self.max_capacity
    }

    /// Live enrollment counter, `0..=max_capacity`.
    pub fn current_enrollment(&self) -> i32 {
        self.current_enrollment
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn semester_id(&self) -> SemesterId {
        self.semester_id
    }

    /// Whether the course has reached capacity.
    pub fn is_full(&self) -> bool {
        self.current_enrollment >= self.max_capacity
    }

    pub fn seats_remaining(&self) -> i32 {
        self.max_capacity - self.current_enrollment
    }

    /// Claim one seat. Returns `false` without mutating when full.
    pub fn take_seat(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.current_enrollment += 1;
        true
    }

    /// Release one seat, floored at zero even under inconsistent prior state.
    pub fn release_seat(&mut self) {
        if self.current_enrollment > 0 {
            self.current_enrollment -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CourseDraft {
        CourseDraft {
            id: CourseId::new(1),
            course_code: "CS201".to_owned(),
            course_name: "Data Structures and Algorithms".to_owned(),
            department: "Computer Science".to_owned(),
            level: 2,
            credits: 3,
            max_capacity: 2,
            current_enrollment: 0,
            instructor: "Dr. Sarah Johnson".to_owned(),
            description: "Introduction to data structures".to_owned(),
            semester_id: SemesterId::new(1),
        }
    }

    #[test]
    fn new_rejects_non_positive_credits() {
        let mut d = draft();
        d.credits = 0;
        assert!(matches!(
            Course::new(d),
            Err(CourseValidationError::NonPositiveCredits(0))
        ));
    }

    #[test]
    fn new_rejects_counter_above_capacity() {
        let mut d = draft();
        d.current_enrollment = 3;
        assert!(matches!(
            Course::new(d),
            Err(CourseValidationError::CounterOutOfRange { .. })
        ));
    }

    #[test]
    fn take_seat_stops_at_capacity() {
        let mut course = Course::new(draft()).expect("valid course");
        assert!(course.take_seat());
        assert!(course.take_seat());
        assert!(course.is_full());
        assert!(!course.take_seat());
        assert_eq!(course.current_enrollment(), 2);
    }

    #[test]
    fn release_seat_floors_at_zero() {
        let mut course = Course::new(draft()).expect("valid course");
        course.release_seat();
        assert_eq!(course.current_enrollment(), 0);
        assert!(course.take_seat());
        course.release_seat();
        assert_eq!(course.current_enrollment(), 0);
    }
}
