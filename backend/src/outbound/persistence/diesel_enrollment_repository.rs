//! PostgreSQL-backed [`EnrollmentRepository`] implementation.
//!
//! The two mutating port operations each run in one database transaction.
//! Enrolling claims a seat with a guarded `UPDATE ... WHERE current_enrollment
//! < max_capacity` before inserting the row; zero affected rows means the
//! course filled concurrently and the transaction aborts without a partial
//! write. The unique `(student_id, course_id)` index backs the duplicate
//! check the same way. Dropping deletes the row first and only decrements the
//! counter when a row was actually removed, floored at zero.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::{
    Course, CourseId, EnrolledCourse, Enrollment, EnrollmentId, EnrollmentStatus, SemesterId,
    Student, StudentId,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CourseRow, EnrollmentRow, NewEnrollmentRow, StudentRow};
use super::pool::DbPool;
use super::schema::{courses, enrollments, students};

/// Diesel-backed implementation of the enrollment repository port.
#[derive(Clone)]
pub struct DieselEnrollmentRepository {
    pool: DbPool,
}

impl DieselEnrollmentRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn course_from_row(row: CourseRow) -> Result<Course, EnrollmentRepositoryError> {
    Course::try_from(row).map_err(|err| EnrollmentRepositoryError::query(err.to_string()))
}

fn enrollment_from_row(row: EnrollmentRow) -> Result<Enrollment, EnrollmentRepositoryError> {
    Enrollment::try_from(row).map_err(|err| EnrollmentRepositoryError::query(err.to_string()))
}

#[async_trait]
impl EnrollmentRepository for DieselEnrollmentRepository {
    async fn find_student(
        &self,
        id: StudentId,
    ) -> Result<Option<Student>, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = students::table
            .find(id.get())
            .select(StudentRow::as_select())
            .first::<StudentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Student::from))
    }

    async fn find_course(
        &self,
        id: CourseId,
    ) -> Result<Option<Course>, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = courses::table
            .find(id.get())
            .select(CourseRow::as_select())
            .first::<CourseRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(course_from_row).transpose()
    }

    async fn find_enrollment(
        &self,
        id: EnrollmentId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = enrollments::table
            .find(id.get())
            .select(EnrollmentRow::as_select())
            .first::<EnrollmentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(enrollment_from_row).transpose()
    }

    async fn is_enrolled(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<bool, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            enrollments::table.filter(
                enrollments::student_id
                    .eq(student_id.get())
                    .and(enrollments::course_id.eq(course_id.get())),
            ),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn enrollments_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<EnrolledCourse>, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(EnrollmentRow, CourseRow)> = enrollments::table
            .inner_join(courses::table)
            .filter(enrollments::student_id.eq(student_id.get()))
            .order(courses::course_code.asc())
            .select((EnrollmentRow::as_select(), CourseRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|(enrollment_row, course_row)| {
                Ok(EnrolledCourse {
                    enrollment: enrollment_from_row(enrollment_row)?,
                    course: course_from_row(course_row)?,
                })
            })
            .collect()
    }

    async fn available_courses(
        &self,
        department: &str,
        year: i32,
        semester_id: SemesterId,
    ) -> Result<Vec<Course>, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CourseRow> = courses::table
            .filter(
                courses::department
                    .eq(department)
                    .and(courses::level.eq(year))
                    .and(courses::semester_id.eq(semester_id.get())),
            )
            .order(courses::course_code.asc())
            .select(CourseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(course_from_row).collect()
    }

    async fn create_enrollment(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let student_key = student_id.get();
        let course_key = course_id.get();

        conn.transaction::<Enrollment, EnrollmentRepositoryError, _>(|conn| {
            async move {
                // Guarded seat claim; zero rows means the course is full.
                let claimed = diesel::update(
                    courses::table.filter(
                        courses::id
                            .eq(course_key)
                            .and(courses::current_enrollment.lt(courses::max_capacity)),
                    ),
                )
                .set(courses::current_enrollment.eq(courses::current_enrollment + 1))
                .execute(conn)
                .await?;

                if claimed == 0 {
                    return Err(EnrollmentRepositoryError::capacity_exhausted());
                }

                // A concurrent duplicate trips the unique index here and rolls
                // the seat claim back with the transaction.
                let row: EnrollmentRow = diesel::insert_into(enrollments::table)
                    .values(NewEnrollmentRow {
                        student_id: student_key,
                        course_id: course_key,
                        status: EnrollmentStatus::Enrolled.as_str(),
                    })
                    .returning(EnrollmentRow::as_returning())
                    .get_result(conn)
                    .await?;

                enrollment_from_row(row)
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete_enrollment(
        &self,
        enrollment_id: EnrollmentId,
        course_id: CourseId,
    ) -> Result<(), EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let enrollment_key = enrollment_id.get();
        let course_key = course_id.get();

        conn.transaction::<(), EnrollmentRepositoryError, _>(|conn| {
            async move {
                let removed = diesel::delete(enrollments::table.find(enrollment_key))
                    .execute(conn)
                    .await?;

                // Only a real deletion releases the seat, floored at zero.
                if removed > 0 {
                    diesel::update(
                        courses::table.filter(
                            courses::id
                                .eq(course_key)
                                .and(courses::current_enrollment.gt(0)),
                        ),
                    )
                    .set(courses::current_enrollment.eq(courses::current_enrollment - 1))
                    .execute(conn)
                    .await?;
                }

                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
