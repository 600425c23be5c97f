//! Enrollment decision engine and catalog/summary projections.
//!
//! The service validates every enrollment mutation against the data it reads
//! through the repository port and delegates the actual write to the port's
//! atomic composite operations. A failed validation returns before any write,
//! so no failure path has side effects. Races that slip past the pre-checks
//! (two callers grabbing the last seat, or double-submitting the same
//! enrollment) are caught by the store's guarded update and unique index and
//! mapped back onto the same domain errors the pre-checks produce.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::policy::{MAX_COURSES_PER_SEMESTER, MAX_CREDITS_PER_SEMESTER};
use crate::domain::ports::{
    AvailableCoursesRequest, CourseCatalogQuery, CourseView, DropCourseRequest, EnrollmentCommand,
    EnrollmentRepository, EnrollmentRepositoryError, EnrollmentView, SelectCourseRequest,
    StudentCourseSummary, StudentSummaryRequest,
};
use crate::domain::{Error, Student, StudentId};

fn map_repository_error(error: EnrollmentRepositoryError) -> Error {
    match error {
        EnrollmentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("enrollment store unavailable: {message}"))
        }
        EnrollmentRepositoryError::Query { message } => {
            Error::internal(format!("enrollment store error: {message}"))
        }
        // Lost races against concurrent callers; same outcome as the
        // corresponding pre-check.
        EnrollmentRepositoryError::CapacityExhausted => Error::course_full(),
        EnrollmentRepositoryError::AlreadyEnrolled => Error::duplicate_enrollment(),
    }
}

/// Service implementing the enrollment command and catalog query ports.
#[derive(Clone)]
pub struct EnrollmentService<R> {
    repo: Arc<R>,
}

impl<R> EnrollmentService<R> {
    /// Create a new service over the enrollment repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> EnrollmentService<R>
where
    R: EnrollmentRepository,
{
    async fn resolve_student(&self, student_id: StudentId) -> Result<Student, Error> {
        self.repo
            .find_student(student_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("Student not found with id: {student_id}")))
    }
}

#[async_trait]
impl<R> EnrollmentCommand for EnrollmentService<R>
where
    R: EnrollmentRepository,
{
    async fn select_course(&self, request: SelectCourseRequest) -> Result<EnrollmentView, Error> {
        let student = self.resolve_student(request.student_id).await?;

        let course = self
            .repo
            .find_course(request.course_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("Course not found with id: {}", request.course_id))
            })?;

        if course.department() != student.department {
            return Err(Error::department_mismatch());
        }
        if course.level() != student.year {
            return Err(Error::level_mismatch());
        }

        if self
            .repo
            .is_enrolled(student.id, course.id())
            .await
            .map_err(map_repository_error)?
        {
            return Err(Error::duplicate_enrollment());
        }

        if course.is_full() {
            return Err(Error::course_full());
        }

        let existing = self
            .repo
            .enrollments_for_student(student.id)
            .await
            .map_err(map_repository_error)?;

        let accumulated_credits: i32 = existing.iter().map(|e| e.course.credits()).sum();
        if accumulated_credits + course.credits() > MAX_CREDITS_PER_SEMESTER {
            return Err(Error::credit_limit_exceeded(
                accumulated_credits,
                course.credits(),
            ));
        }

        if existing.len() >= MAX_COURSES_PER_SEMESTER as usize {
            return Err(Error::course_limit_exceeded(existing.len()));
        }

        let enrollment = self
            .repo
            .create_enrollment(student.id, course.id())
            .await
            .map_err(map_repository_error)?;

        info!(
            student_id = %student.id,
            course_code = course.course_code(),
            "student enrolled"
        );

        Ok(EnrollmentView::compose(&enrollment, &student, &course))
    }

    async fn drop_course(&self, request: DropCourseRequest) -> Result<(), Error> {
        let enrollment = self
            .repo
            .find_enrollment(request.enrollment_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!(
                    "Enrollment not found with id: {}",
                    request.enrollment_id
                ))
            })?;

        if enrollment.student_id != request.student_id {
            return Err(Error::unauthorized(
                "You are not authorized to drop this course",
            ));
        }

        self.repo
            .delete_enrollment(enrollment.id, enrollment.course_id)
            .await
            .map_err(map_repository_error)?;

        info!(
            student_id = %request.student_id,
            enrollment_id = %enrollment.id,
            "enrollment dropped"
        );

        Ok(())
    }
}

#[async_trait]
impl<R> CourseCatalogQuery for EnrollmentService<R>
where
    R: EnrollmentRepository,
{
    async fn available_courses(
        &self,
        request: AvailableCoursesRequest,
    ) -> Result<Vec<CourseView>, Error> {
        let student = self.resolve_student(request.student_id).await?;

        let courses = self
            .repo
            .available_courses(&student.department, student.year, request.semester_id)
            .await
            .map_err(map_repository_error)?;

        Ok(courses.into_iter().map(CourseView::from).collect())
    }

    async fn student_summary(
        &self,
        request: StudentSummaryRequest,
    ) -> Result<StudentCourseSummary, Error> {
        let student = self.resolve_student(request.student_id).await?;

        // The aggregation spans every live enrollment of the student; the
        // semester argument only scopes browsing, not the summary.
        let enrollments = self
            .repo
            .enrollments_for_student(student.id)
            .await
            .map_err(map_repository_error)?;

        let total_credits: i32 = enrollments.iter().map(|e| e.course.credits()).sum();
        let views = enrollments
            .iter()
            .map(|e| EnrollmentView::compose(&e.enrollment, &student, &e.course))
            .collect();

        Ok(StudentCourseSummary::assemble(
            &student,
            total_credits,
            views,
        ))
    }
}

#[cfg(test)]
#[path = "enrollment_service_tests.rs"]
mod tests;
