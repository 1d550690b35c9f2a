//! Enrollment and progress tracking
//!
//! Manages, per user, the mapping from course id to an enrollment record
//! holding per-lesson completion flags and an enrollment timestamp.
//!
//! Reads and writes are split: `enrollment()` and `percent_complete()` are
//! pure reads that never create records, and `enroll()` is the only way a
//! record comes into existence. A front end that wants auto-enroll-on-first-
//! interaction convenience has to call `enroll()` itself.

use crate::identity::normalize_email;
use crate::instance::Instance;
use crate::{Result, storage};

pub mod errors;
pub mod types;

pub use errors::EnrollmentError;
pub use types::Enrollment;

impl Instance {
    /// Whether an enrollment record exists for this user and course.
    pub fn is_enrolled(&self, email: &str, course_id: &str) -> bool {
        let email = normalize_email(email);
        let enrollments = self.internal().enrollments.read().unwrap();
        enrollments
            .get(&email)
            .is_some_and(|courses| courses.contains_key(course_id))
    }

    /// The enrollment record for this user and course, if one exists.
    ///
    /// Pure read: never creates a record.
    pub fn enrollment(&self, email: &str, course_id: &str) -> Option<Enrollment> {
        let email = normalize_email(email);
        let enrollments = self.internal().enrollments.read().unwrap();
        enrollments
            .get(&email)
            .and_then(|courses| courses.get(course_id))
            .cloned()
    }

    /// Enroll a user in a course.
    ///
    /// Creates an all-incomplete record sized to the course's lesson count,
    /// stamped with the current clock time, and persists the registry.
    /// Idempotent: enrolling twice leaves the existing record untouched.
    ///
    /// # Errors
    /// `EnrollmentError::UnknownCourse` if the id is not in the catalog.
    pub fn enroll(&self, email: &str, course_id: &str) -> Result<()> {
        let email = normalize_email(email);
        let lessons = match self.catalog().get(course_id) {
            Some(course) => course.lesson_count(),
            None => {
                return Err(EnrollmentError::UnknownCourse {
                    course_id: course_id.to_string(),
                }
                .into());
            }
        };

        {
            let mut enrollments = self.internal().enrollments.write().unwrap();
            let courses = enrollments.entry(email.clone()).or_default();
            if courses.contains_key(course_id) {
                return Ok(());
            }
            let record = Enrollment::new(lessons, self.internal().clock.now_millis());
            courses.insert(course_id.to_string(), record);
        }

        tracing::debug!("{email} enrolled in {course_id}");
        self.persist_enrollments()
    }

    /// Remove a user's enrollment record for a course, if present.
    ///
    /// No-op (but still persists) when nothing was enrolled.
    pub fn unenroll(&self, email: &str, course_id: &str) -> Result<()> {
        let email = normalize_email(email);
        let removed = {
            let mut enrollments = self.internal().enrollments.write().unwrap();
            match enrollments.get_mut(&email) {
                Some(courses) => courses.remove(course_id).is_some(),
                None => false,
            }
        };
        if removed {
            tracing::debug!("{email} unenrolled from {course_id}");
        }
        self.persist_enrollments()
    }

    /// Set a single lesson's completion flag.
    ///
    /// # Errors
    /// `EnrollmentError::NotEnrolled` without an existing record;
    /// `EnrollmentError::LessonIndexOutOfRange` when `lesson_index` is outside
    /// the stored completion vector.
    pub fn set_lesson_completion(
        &self,
        email: &str,
        course_id: &str,
        lesson_index: usize,
        done: bool,
    ) -> Result<()> {
        let email = normalize_email(email);
        {
            let mut enrollments = self.internal().enrollments.write().unwrap();
            let record = enrollments
                .get_mut(&email)
                .and_then(|courses| courses.get_mut(course_id))
                .ok_or_else(|| EnrollmentError::NotEnrolled {
                    email: email.clone(),
                    course_id: course_id.to_string(),
                })?;
            let lessons = record.completed.len();
            let flag = record.completed.get_mut(lesson_index).ok_or(
                EnrollmentError::LessonIndexOutOfRange {
                    index: lesson_index,
                    lessons,
                },
            )?;
            *flag = done;
        }
        self.persist_enrollments()
    }

    /// Mark every lesson of an enrolled course complete.
    pub fn mark_all_lessons(&self, email: &str, course_id: &str) -> Result<()> {
        self.fill_completion(email, course_id, true)
    }

    /// Reset every lesson of an enrolled course to incomplete.
    pub fn reset_progress(&self, email: &str, course_id: &str) -> Result<()> {
        self.fill_completion(email, course_id, false)
    }

    /// Percent complete for this user and course, `0..=100`.
    ///
    /// `0` when not enrolled; otherwise the stored record's rounded ratio.
    pub fn percent_complete(&self, email: &str, course_id: &str) -> u8 {
        self.enrollment(email, course_id)
            .map(|record| record.percent())
            .unwrap_or(0)
    }

    fn fill_completion(&self, email: &str, course_id: &str, done: bool) -> Result<()> {
        let email = normalize_email(email);
        {
            let mut enrollments = self.internal().enrollments.write().unwrap();
            let record = enrollments
                .get_mut(&email)
                .and_then(|courses| courses.get_mut(course_id))
                .ok_or_else(|| EnrollmentError::NotEnrolled {
                    email: email.clone(),
                    course_id: course_id.to_string(),
                })?;
            record.completed.fill(done);
        }
        self.persist_enrollments()
    }

    /// Persist the full enrollment registry under its storage key.
    pub(crate) fn persist_enrollments(&self) -> Result<()> {
        let enrollments = self.internal().enrollments.read().unwrap();
        storage::store(
            self.internal().storage.as_ref(),
            storage::keys::ENROLLMENTS,
            &*enrollments,
        )
    }
}
