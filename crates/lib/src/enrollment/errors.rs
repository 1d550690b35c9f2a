//! Error types for enrollment tracking
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EnrollmentError {
    /// A progress mutation was attempted without a prior enrollment.
    #[error("Not enrolled in course '{course_id}': {email}")]
    NotEnrolled {
        /// The (lowercased) email of the user
        email: String,
        /// The course the mutation targeted
        course_id: String,
    },

    /// A lesson index outside the enrollment's completion vector.
    #[error("Lesson index {index} out of range for {lessons} lessons")]
    LessonIndexOutOfRange {
        /// The rejected index
        index: usize,
        /// The number of lessons in the stored record
        lessons: usize,
    },

    /// Enrollment attempted against a course id the catalog does not know.
    #[error("Unknown course: {course_id}")]
    UnknownCourse {
        /// The id that was not found in the catalog
        course_id: String,
    },
}

impl EnrollmentError {
    /// Check if this error indicates a missing enrollment or course.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EnrollmentError::NotEnrolled { .. } | EnrollmentError::UnknownCourse { .. }
        )
    }

    /// Check if this error is a lesson index bounds failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, EnrollmentError::LessonIndexOutOfRange { .. })
    }
}

// Conversion to the main Error type
impl From<EnrollmentError> for crate::Error {
    fn from(err: EnrollmentError) -> Self {
        crate::Error::Enrollment(err)
    }
}
