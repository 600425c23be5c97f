//! Row types bridging Diesel and the domain entities.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::domain::{
    Course, CourseDraft, CourseId, CourseValidationError, Enrollment, EnrollmentId, SemesterId,
    Student, StudentId, UnknownEnrollmentStatus,
};

use super::schema::{courses, enrollments, semesters, students};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StudentRow {
    pub id: i64,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub year: i32,
    pub pin: String,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            id: StudentId::new(row.id),
            student_code: row.student_code,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            department: row.department,
            year: row.year,
            pin: row.pin,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CourseRow {
    pub id: i64,
    pub course_code: String,
    pub course_name: String,
    pub department: String,
    pub level: i32,
    pub credits: i32,
    pub max_capacity: i32,
    pub current_enrollment: i32,
    pub instructor: String,
    pub description: String,
    pub semester_id: i64,
}

impl TryFrom<CourseRow> for Course {
    type Error = CourseValidationError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        Course::new(CourseDraft {
            id: CourseId::new(row.id),
            course_code: row.course_code,
            course_name: row.course_name,
            department: row.department,
            level: row.level,
            credits: row.credits,
            max_capacity: row.max_capacity,
            current_enrollment: row.current_enrollment,
            instructor: row.instructor,
            description: row.description,
            semester_id: SemesterId::new(row.semester_id),
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = enrollments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EnrollmentRow {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<EnrollmentRow> for Enrollment {
    type Error = UnknownEnrollmentStatus;

    fn try_from(row: EnrollmentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EnrollmentId::new(row.id),
            student_id: StudentId::new(row.student_id),
            course_id: CourseId::new(row.course_id),
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = semesters)]
pub struct NewSemesterRow<'a> {
    pub semester_code: &'a str,
    pub name: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = students)]
pub struct NewStudentRow<'a> {
    pub student_code: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub department: &'a str,
    pub year: i32,
    pub pin: &'a str,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = courses)]
pub struct NewCourseRow<'a> {
    pub course_code: &'a str,
    pub course_name: &'a str,
    pub department: &'a str,
    pub level: i32,
    pub credits: i32,
    pub max_capacity: i32,
    pub current_enrollment: i32,
    pub instructor: &'a str,
    pub description: &'a str,
    pub semester_id: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = enrollments)]
pub struct NewEnrollmentRow<'a> {
    pub student_id: i64,
    pub course_id: i64,
    pub status: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_row() -> CourseRow {
        CourseRow {
            id: 10,
            course_code: "CS201".to_owned(),
            course_name: "Data Structures and Algorithms".to_owned(),
            department: "Computer Science".to_owned(),
            level: 2,
            credits: 3,
            max_capacity: 30,
            current_enrollment: 5,
            instructor: "Dr. Sarah Johnson".to_owned(),
            description: "Introduction to data structures".to_owned(),
            semester_id: 1,
        }
    }

    #[test]
    fn course_row_converts_through_validation() {
        let course = Course::try_from(course_row()).expect("valid row");
        assert_eq!(course.id(), CourseId::new(10));
        assert_eq!(course.seats_remaining(), 25);
    }

    #[test]
    fn course_row_with_corrupt_counter_is_rejected() {
        let mut row = course_row();
        row.current_enrollment = 31;
        assert!(matches!(
            Course::try_from(row),
            Err(CourseValidationError::CounterOutOfRange { .. })
        ));
    }

    #[test]
    fn enrollment_row_rejects_unknown_status() {
        let row = EnrollmentRow {
            id: 1,
            student_id: 1,
            course_id: 10,
            status: "WAITLISTED".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(Enrollment::try_from(row).is_err());
    }
}
