//! CLI argument definitions for the LiteLearn binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use litelearn::{Level, Theme};

/// Course level filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Beginner => Level::Beginner,
            LevelArg::Intermediate => Level::Intermediate,
            LevelArg::Advanced => Level::Advanced,
        }
    }
}

/// Theme preference
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// LiteLearn local-first course tracker
#[derive(Parser, Debug)]
#[command(name = "litelearn")]
#[command(about = "LiteLearn: local-first course catalog and enrollment tracker")]
#[command(version)]
pub struct Cli {
    /// Data directory for the persisted state files
    #[arg(
        short = 'D',
        long,
        default_value = "./litelearn-data",
        env = "LITELEARN_DATA_DIR"
    )]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and log in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,
        email: String,
        password: String,
    },
    /// Log in to an existing account
    Login { email: String, password: String },
    /// Clear the active session
    Logout,
    /// Show the logged-in account
    Whoami,
    /// List catalog courses, optionally filtered
    Courses {
        /// Free-text filter on title, description, and tags
        #[arg(short, long)]
        query: Option<String>,
        /// Exact level filter
        #[arg(short, long)]
        level: Option<LevelArg>,
    },
    /// Show a course's details and lesson progress
    Show { course: String },
    /// Enroll the logged-in user in a course
    Enroll { course: String },
    /// Remove the logged-in user's enrollment
    Unenroll { course: String },
    /// Mark one lesson complete (or incomplete with --undone)
    Lesson {
        course: String,
        /// Lesson number as shown by `show`, starting at 1
        lesson: usize,
        /// Mark the lesson incomplete instead
        #[arg(long)]
        undone: bool,
    },
    /// Mark every lesson of a course complete
    MarkAll { course: String },
    /// Reset a course's progress to zero
    Reset { course: String },
    /// List the logged-in user's enrollments with progress
    Dashboard,
    /// Show the logged-in account summary
    Account,
    /// Export all data as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Import a previously exported JSON file, replacing all data
    Import { file: PathBuf },
    /// Remove all persisted LiteLearn data
    Wipe {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
    /// Show or set the theme preference
    Theme { theme: Option<ThemeArg> },
}
