//! Demo data for local development.
//!
//! Seeds one semester, four students, and six courses, and only when the
//! `semesters` table is empty so repeated starts never duplicate data.

use chrono::NaiveDate;
use diesel::QueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::info;

use crate::domain::ports::EnrollmentRepositoryError;

use super::error_mapping::map_pool_error;
use super::models::{NewCourseRow, NewSemesterRow, NewStudentRow};
use super::pool::DbPool;
use super::schema::{courses, semesters, students};

fn seed_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, EnrollmentRepositoryError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        EnrollmentRepositoryError::query(format!("invalid seed date {year}-{month:02}-{day:02}"))
    })
}

fn demo_students() -> [NewStudentRow<'static>; 4] {
    [
        NewStudentRow {
            student_code: "STU001",
            first_name: "Kwame",
            last_name: "Asante",
            email: "kwame.asante@university.edu",
            department: "Computer Science",
            year: 2,
            pin: "1234",
        },
        NewStudentRow {
            student_code: "STU002",
            first_name: "Ama",
            last_name: "Mensah",
            email: "ama.mensah@university.edu",
            department: "Computer Science",
            year: 3,
            pin: "5678",
        },
        NewStudentRow {
            student_code: "STU003",
            first_name: "Kofi",
            last_name: "Osei",
            email: "kofi.osei@university.edu",
            department: "Mathematics",
            year: 1,
            pin: "9012",
        },
        NewStudentRow {
            student_code: "STU004",
            first_name: "Akosua",
            last_name: "Boateng",
            email: "akosua.boateng@university.edu",
            department: "Computer Science",
            year: 2,
            pin: "3456",
        },
    ]
}

fn demo_courses(semester_id: i64) -> [NewCourseRow<'static>; 6] {
    let course = |course_code,
                  course_name,
                  department,
                  level,
                  credits,
                  max_capacity,
                  instructor,
                  description| NewCourseRow {
        course_code,
        course_name,
        department,
        level,
        credits,
        max_capacity,
        current_enrollment: 0,
        instructor,
        description,
        semester_id,
    };

    [
        course(
            "CS201",
            "Data Structures and Algorithms",
            "Computer Science",
            2,
            3,
            30,
            "Dr. Sarah Johnson",
            "Introduction to data structures and algorithm analysis",
        ),
        course(
            "CS301",
            "Database Systems",
            "Computer Science",
            3,
            3,
            25,
            "Dr. Michael Brown",
            "Fundamentals of database design and SQL",
        ),
        course(
            "CS202",
            "Object-Oriented Programming",
            "Computer Science",
            2,
            4,
            35,
            "Dr. Emily Davis",
            "Advanced OOP concepts and design patterns",
        ),
        course(
            "MATH101",
            "Calculus I",
            "Mathematics",
            1,
            4,
            40,
            "Dr. Robert Wilson",
            "Introduction to differential and integral calculus",
        ),
        course(
            "CS401",
            "Software Engineering",
            "Computer Science",
            4,
            3,
            20,
            "Dr. David Martinez",
            "Software development lifecycle and methodologies",
        ),
        course(
            "CS302",
            "Operating Systems",
            "Computer Science",
            3,
            3,
            28,
            "Dr. Lisa Anderson",
            "OS concepts, processes, memory management",
        ),
    ]
}

/// Seed the demo semester, students, and courses if the store is empty.
pub async fn seed_demo_data(pool: &DbPool) -> Result<(), EnrollmentRepositoryError> {
    let mut conn = pool.get().await.map_err(map_pool_error)?;
    let start_date = seed_date(2024, 9, 1)?;
    let end_date = seed_date(2024, 12, 15)?;

    conn.transaction::<(), EnrollmentRepositoryError, _>(|conn| {
        async move {
            let existing: i64 = semesters::table.count().get_result(conn).await?;
            if existing > 0 {
                info!(semesters = existing, "demo data already present, skipping seed");
                return Ok(());
            }

            let semester_id: i64 = diesel::insert_into(semesters::table)
                .values(NewSemesterRow {
                    semester_code: "FALL2024",
                    name: "Fall 2024",
                    start_date,
                    end_date,
                    is_active: true,
                })
                .returning(semesters::id)
                .get_result(conn)
                .await?;

            diesel::insert_into(students::table)
                .values(Vec::from(demo_students()))
                .execute(conn)
                .await?;

            diesel::insert_into(courses::table)
                .values(Vec::from(demo_courses(semester_id)))
                .execute(conn)
                .await?;

            info!(semester_id, "seeded demo semester, students, and courses");
            Ok(())
        }
        .scope_boxed()
    })
    .await
}
