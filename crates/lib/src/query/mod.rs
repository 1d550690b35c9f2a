//! Read-only derived views
//!
//! The query layer computes views from the in-memory registries and the
//! catalog; it never touches storage and never mutates. Presentation code
//! renders directly from these results.

use serde::{Deserialize, Serialize};

use crate::catalog::{Course, Level};
use crate::identity::normalize_email;
use crate::instance::Instance;

/// Account overview for the account view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub name: String,
    pub email: String,
    /// Number of courses the user is enrolled in
    pub enrollment_count: usize,
}

impl Instance {
    /// Filter the catalog by free-text query and level.
    ///
    /// The trimmed query matches case-insensitively as a substring of the
    /// course's title, description, and space-joined tags; an empty query
    /// matches everything. `level` is an exact match, `None` matches all.
    /// Both filters are ANDed and catalog order is preserved.
    pub fn filter_courses(&self, query: &str, level: Option<Level>) -> Vec<Course> {
        let needle = query.trim().to_lowercase();
        self.catalog()
            .courses()
            .iter()
            .filter(|course| {
                let matches_level = level.is_none_or(|wanted| course.level == wanted);
                let matches_query = needle.is_empty() || {
                    let haystack = format!(
                        "{} {} {}",
                        course.title,
                        course.description,
                        course.tags.join(" ")
                    )
                    .to_lowercase();
                    haystack.contains(&needle)
                };
                matches_level && matches_query
            })
            .cloned()
            .collect()
    }

    /// The user's enrolled courses, each paired with percent complete.
    ///
    /// One entry per enrollment record, in enrollment-map iteration order.
    /// Records whose course id is no longer in the catalog are skipped, so a
    /// catalog change cannot break the dashboard.
    pub fn enrolled_courses(&self, email: &str) -> Vec<(Course, u8)> {
        let email = normalize_email(email);
        let enrollments = self.internal().enrollments.read().unwrap();
        let Some(courses) = enrollments.get(&email) else {
            return Vec::new();
        };
        courses
            .iter()
            .filter_map(|(course_id, record)| {
                let course = self.catalog().get(course_id)?;
                Some((course.clone(), record.percent()))
            })
            .collect()
    }

    /// Summary counts for the account view; `None` for an unknown email.
    pub fn account_summary(&self, email: &str) -> Option<AccountSummary> {
        let email = normalize_email(email);
        let users = self.internal().users.read().unwrap();
        let user = users.get(&email)?;

        let enrollments = self.internal().enrollments.read().unwrap();
        let enrollment_count = enrollments.get(&email).map_or(0, |courses| courses.len());

        Some(AccountSummary {
            name: user.name.clone(),
            email: user.email.clone(),
            enrollment_count,
        })
    }
}
