//! In-memory [`EnrollmentRepository`] for service and HTTP tests.
//!
//! A single mutex guards the whole store, so every composite operation is
//! serialized exactly like the SQL adapter's transactions: the capacity gate
//! and the duplicate check happen under the same lock as the writes they
//! guard.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::{
    Course, CourseId, EnrolledCourse, Enrollment, EnrollmentId, EnrollmentStatus, Semester,
    SemesterId, Student, StudentId,
};

#[derive(Default)]
struct State {
    students: HashMap<StudentId, Student>,
    courses: HashMap<CourseId, Course>,
    semesters: HashMap<SemesterId, Semester>,
    enrollments: HashMap<EnrollmentId, Enrollment>,
    next_enrollment_id: i64,
}

/// Hash-map backed enrollment store.
#[derive(Default)]
pub struct InMemoryEnrollmentRepository {
    state: Mutex<State>,
}

impl InMemoryEnrollmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poison| poison.into_inner())
    }

    pub fn insert_student(&self, student: Student) {
        self.lock().students.insert(student.id, student);
    }

    pub fn insert_course(&self, course: Course) {
        self.lock().courses.insert(course.id(), course);
    }

    pub fn insert_semester(&self, semester: Semester) {
        self.lock().semesters.insert(semester.id, semester);
    }

    /// Current enrollment counter of a course, if the course exists.
    pub fn course_counter(&self, id: CourseId) -> Option<i32> {
        self.lock().courses.get(&id).map(Course::current_enrollment)
    }

    /// Number of live enrollment rows across all students.
    pub fn enrollment_count(&self) -> usize {
        self.lock().enrollments.len()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn find_student(
        &self,
        id: StudentId,
    ) -> Result<Option<Student>, EnrollmentRepositoryError> {
        Ok(self.lock().students.get(&id).cloned())
    }

    async fn find_course(
        &self,
        id: CourseId,
    ) -> Result<Option<Course>, EnrollmentRepositoryError> {
        Ok(self.lock().courses.get(&id).cloned())
    }

    async fn find_enrollment(
        &self,
        id: EnrollmentId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError> {
        Ok(self.lock().enrollments.get(&id).cloned())
    }

    async fn is_enrolled(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<bool, EnrollmentRepositoryError> {
        Ok(self
            .lock()
            .enrollments
            .values()
            .any(|e| e.student_id == student_id && e.course_id == course_id))
    }

    async fn enrollments_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<EnrolledCourse>, EnrollmentRepositoryError> {
        let state = self.lock();
        let mut rows: Vec<EnrolledCourse> = state
            .enrollments
            .values()
            .filter(|e| e.student_id == student_id)
            .map(|enrollment| {
                let course = state
                    .courses
                    .get(&enrollment.course_id)
                    .cloned()
                    .ok_or_else(|| {
                        EnrollmentRepositoryError::query(format!(
                            "enrollment {} references missing course {}",
                            enrollment.id, enrollment.course_id
                        ))
                    })?;
                Ok(EnrolledCourse {
                    enrollment: enrollment.clone(),
                    course,
                })
            })
            .collect::<Result<_, EnrollmentRepositoryError>>()?;
        rows.sort_by(|a, b| a.course.course_code().cmp(b.course.course_code()));
        Ok(rows)
    }

    async fn available_courses(
        &self,
        department: &str,
        year: i32,
        semester_id: SemesterId,
    ) -> Result<Vec<Course>, EnrollmentRepositoryError> {
        let mut courses: Vec<Course> = self
            .lock()
            .courses
            .values()
            .filter(|c| {
                c.department() == department && c.level() == year && c.semester_id() == semester_id
            })
            .cloned()
            .collect();
        courses.sort_by(|a, b| a.course_code().cmp(b.course_code()));
        Ok(courses)
    }

    async fn create_enrollment(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        let mut state = self.lock();
        if state
            .enrollments
            .values()
            .any(|e| e.student_id == student_id && e.course_id == course_id)
        {
            return Err(EnrollmentRepositoryError::already_enrolled());
        }
        let course = state.courses.get_mut(&course_id).ok_or_else(|| {
            EnrollmentRepositoryError::query(format!("course {course_id} disappeared"))
        })?;
        if !course.take_seat() {
            return Err(EnrollmentRepositoryError::capacity_exhausted());
        }
        state.next_enrollment_id += 1;
        let now = Utc::now();
        let enrollment = Enrollment {
            id: EnrollmentId::new(state.next_enrollment_id),
            student_id,
            course_id,
            status: EnrollmentStatus::Enrolled,
            created_at: now,
            updated_at: now,
        };
        state.enrollments.insert(enrollment.id, enrollment.clone());
        Ok(enrollment)
    }

    async fn delete_enrollment(
        &self,
        enrollment_id: EnrollmentId,
        course_id: CourseId,
    ) -> Result<(), EnrollmentRepositoryError> {
        let mut state = self.lock();
        // Only a real deletion releases the seat.
        if state.enrollments.remove(&enrollment_id).is_some() {
            if let Some(course) = state.courses.get_mut(&course_id) {
                course.release_seat();
            }
        }
        Ok(())
    }
}
