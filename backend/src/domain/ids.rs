//! Typed identifiers for the enrollment domain.
//!
//! Every entity key is an `i64` assigned by the database. Wrapping them in
//! newtypes keeps a student id from being passed where a course id is
//! expected; the repository adapter unwraps them at the SQL boundary.

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
            utoipa::ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database key.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Return the raw database key.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Primary key of a [`crate::domain::Student`].
    StudentId
}

define_id! {
    /// Primary key of a [`crate::domain::Course`].
    CourseId
}

define_id! {
    /// Primary key of a [`crate::domain::Semester`].
    SemesterId
}

define_id! {
    /// Primary key of an [`crate::domain::Enrollment`].
    EnrollmentId
}
