//! Core data types for enrollment tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's enrollment in a single course.
///
/// `completed` holds one flag per lesson, in catalog lesson order, and is
/// sized to the course's lesson count at enrollment time. If the catalog
/// changes between versions a stored vector may disagree with the current
/// lesson count; all accessors bound themselves to the stored vector, so a
/// mismatched record degrades instead of panicking.
///
/// Serialized field names match the browser front end's persisted blobs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Per-lesson completion flags
    pub completed: Vec<bool>,

    /// Enrollment timestamp, milliseconds since Unix epoch
    #[serde(rename = "enrolledAt")]
    pub enrolled_at: u64,
}

impl Enrollment {
    /// A fresh all-incomplete record for a course with `lessons` lessons.
    pub fn new(lessons: usize, enrolled_at: u64) -> Self {
        Self {
            completed: vec![false; lessons],
            enrolled_at,
        }
    }

    /// Number of lessons marked complete.
    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|&&done| done).count()
    }

    /// Integer percent complete in `[0, 100]`.
    ///
    /// Rounded half away from zero on the scaled ratio, so a 6-lesson course
    /// with one lesson done reports 17%. An empty vector reports 0.
    pub fn percent(&self) -> u8 {
        if self.completed.is_empty() {
            return 0;
        }
        let done = self.completed_count() as f64;
        let total = self.completed.len() as f64;
        (done / total * 100.0).round() as u8
    }

    /// The enrollment timestamp as a UTC datetime, if representable.
    pub fn enrolled_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(i64::try_from(self.enrolled_at).ok()?)
    }
}
