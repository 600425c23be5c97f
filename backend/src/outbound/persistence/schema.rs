//! Diesel table definitions mirroring `backend/migrations`.

diesel::table! {
    semesters (id) {
        id -> Int8,
        semester_code -> Text,
        name -> Text,
        start_date -> Date,
        end_date -> Date,
        is_active -> Bool,
    }
}

diesel::table! {
    students (id) {
        id -> Int8,
        student_code -> Text,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        department -> Text,
        year -> Int4,
        pin -> Text,
    }
}

diesel::table! {
    courses (id) {
        id -> Int8,
        course_code -> Text,
        course_name -> Text,
        department -> Text,
        level -> Int4,
        credits -> Int4,
        max_capacity -> Int4,
        current_enrollment -> Int4,
        instructor -> Text,
        description -> Text,
        semester_id -> Int8,
    }
}

diesel::table! {
    enrollments (id) {
        id -> Int8,
        student_id -> Int8,
        course_id -> Int8,
        status -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(courses -> semesters (semester_id));
diesel::joinable!(enrollments -> students (student_id));
diesel::joinable!(enrollments -> courses (course_id));

diesel::allow_tables_to_appear_in_same_query!(semesters, students, courses, enrollments);
