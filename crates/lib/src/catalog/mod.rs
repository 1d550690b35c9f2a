//! Course catalog
//!
//! The catalog is an immutable, in-memory list of course definitions. It is
//! seeded once at startup and never mutated at runtime; enrollment records
//! reference courses by id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        };
        f.write_str(name)
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

/// A course offered by the catalog.
///
/// Immutable for the process lifetime. `lessons` is the ordered list of
/// lesson titles; enrollment completion flags are indexed against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course id, the key enrollments reference
    pub id: String,
    pub title: String,
    pub level: Level,
    pub tags: Vec<String>,
    pub description: String,
    /// Ordered lesson titles
    pub lessons: Vec<String>,
}

impl Course {
    /// Number of lessons in this course.
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}

/// The fixed, immutable list of offered courses.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Creates a catalog from an arbitrary course list. Order is preserved
    /// and is the order query results are returned in.
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Looks up a course by id.
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// All courses, in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// The built-in demo catalog.
    pub fn demo() -> Self {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self::new(vec![
            Course {
                id: "html101".to_string(),
                title: "HTML for Beginners".to_string(),
                level: Level::Beginner,
                tags: strings(&["web", "frontend", "markup"]),
                description: "Learn the building blocks of the web: tags, structure, and \
                              semantic HTML. No prior experience required."
                    .to_string(),
                lessons: strings(&[
                    "What is HTML?",
                    "Your first page",
                    "Headings & paragraphs",
                    "Links & images",
                    "Semantic layout",
                    "Forms 101",
                ]),
            },
            Course {
                id: "css101".to_string(),
                title: "Modern CSS Layouts".to_string(),
                level: Level::Intermediate,
                tags: strings(&["css", "flexbox", "grid"]),
                description: "Master Flexbox and Grid to craft responsive, accessible layouts."
                    .to_string(),
                lessons: strings(&[
                    "Cascade & selectors refresher",
                    "Flexbox fundamentals",
                    "Grid basics",
                    "Responsive techniques",
                    "Fluid type & spacing",
                    "Polish & accessibility",
                ]),
            },
            Course {
                id: "js101".to_string(),
                title: "Practical JavaScript".to_string(),
                level: Level::Beginner,
                tags: strings(&["javascript", "dom", "programming"]),
                description: "From variables to DOM manipulation — build interactive pages \
                              with vanilla JS."
                    .to_string(),
                lessons: strings(&[
                    "Syntax & variables",
                    "Control flow",
                    "Functions & scope",
                    "Arrays & objects",
                    "DOM & events",
                    "LocalStorage mini-project",
                ]),
            },
            Course {
                id: "a11y201".to_string(),
                title: "Web Accessibility Essentials".to_string(),
                level: Level::Advanced,
                tags: strings(&["a11y", "wcag", "inclusive"]),
                description: "Design and code for everyone. Learn WCAG, ARIA, keyboard nav, \
                              and testing tips."
                    .to_string(),
                lessons: strings(&[
                    "Why accessibility matters",
                    "Perceivable: text alternatives",
                    "Operable: keyboard & focus",
                    "Understandable: forms & content",
                    "Robust: ARIA & semantics",
                    "Auditing & tooling",
                ]),
            },
        ])
    }
}
