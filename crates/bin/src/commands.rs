//! Command handlers for the LiteLearn CLI.

use std::fs;

use litelearn::{Course, Instance, User};

use crate::cli::Commands;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn dispatch(instance: &Instance, command: Commands) -> CommandResult {
    match command {
        Commands::Register {
            name,
            email,
            password,
        } => {
            let user = instance.register(&name, &email, &password)?;
            println!("Welcome, {}! Logged in as {}.", user.name, user.email);
            Ok(())
        }
        Commands::Login { email, password } => {
            let user = instance.authenticate(&email, &password)?;
            println!("Hi, {}.", user.name);
            Ok(())
        }
        Commands::Logout => {
            instance.logout()?;
            println!("Logged out.");
            Ok(())
        }
        Commands::Whoami => {
            match instance.current_user() {
                Some(user) => println!("{} <{}>", user.name, user.email),
                None => println!("Not logged in."),
            }
            Ok(())
        }
        Commands::Courses { query, level } => {
            let query = query.unwrap_or_default();
            let results = instance.filter_courses(&query, level.map(Into::into));
            if results.is_empty() {
                println!("No courses match.");
                return Ok(());
            }
            for course in &results {
                let progress = match instance.current_user() {
                    Some(user) if instance.is_enrolled(&user.email, &course.id) => {
                        format!("{}%", instance.percent_complete(&user.email, &course.id))
                    }
                    _ => format!("{} lessons", course.lesson_count()),
                };
                println!(
                    "{:<10} {:<30} {:<12} {}",
                    course.id, course.title, course.level, progress
                );
            }
            Ok(())
        }
        Commands::Show { course } => show_course(instance, &course),
        Commands::Enroll { course } => {
            let user = require_login(instance)?;
            instance.enroll(&user.email, &course)?;
            println!("Enrolled in {course}.");
            Ok(())
        }
        Commands::Unenroll { course } => {
            let user = require_login(instance)?;
            instance.unenroll(&user.email, &course)?;
            println!("Unenrolled from {course}.");
            Ok(())
        }
        Commands::Lesson {
            course,
            lesson,
            undone,
        } => {
            let user = require_login(instance)?;
            let index = lesson
                .checked_sub(1)
                .ok_or("lesson numbers start at 1")?;
            instance.set_lesson_completion(&user.email, &course, index, !undone)?;
            println!(
                "Lesson {lesson} of {course} marked {}. Progress: {}%",
                if undone { "incomplete" } else { "complete" },
                instance.percent_complete(&user.email, &course)
            );
            Ok(())
        }
        Commands::MarkAll { course } => {
            let user = require_login(instance)?;
            instance.mark_all_lessons(&user.email, &course)?;
            println!("All lessons of {course} marked complete.");
            Ok(())
        }
        Commands::Reset { course } => {
            let user = require_login(instance)?;
            instance.reset_progress(&user.email, &course)?;
            println!("Progress in {course} reset.");
            Ok(())
        }
        Commands::Dashboard => {
            let user = require_login(instance)?;
            let dashboard = instance.enrolled_courses(&user.email);
            if dashboard.is_empty() {
                println!("No enrollments yet. Browse `litelearn courses` to get started.");
                return Ok(());
            }
            for (course, percent) in &dashboard {
                let enrolled = instance
                    .enrollment(&user.email, &course.id)
                    .and_then(|record| record.enrolled_at_utc())
                    .map(|utc| utc.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<10} {:<30} {:>4}%   enrolled {}",
                    course.id, course.title, percent, enrolled
                );
            }
            Ok(())
        }
        Commands::Account => {
            let user = require_login(instance)?;
            let summary = instance
                .account_summary(&user.email)
                .ok_or("account not found")?;
            println!("Name:        {}", summary.name);
            println!("Email:       {}", summary.email);
            println!("Enrollments: {}", summary.enrollment_count);
            Ok(())
        }
        Commands::Export { out } => {
            let json = instance.export_json()?;
            match out {
                Some(path) => {
                    fs::write(&path, &json)?;
                    println!("Exported to {}.", path.display());
                }
                None => println!("{json}"),
            }
            Ok(())
        }
        Commands::Import { file } => {
            let payload = fs::read_to_string(&file)?;
            instance.import_json(&payload)?;
            println!("Import successful.");
            Ok(())
        }
        Commands::Wipe { yes } => {
            if !yes {
                return Err("refusing to wipe without --yes".into());
            }
            instance.wipe()?;
            println!("Data cleared.");
            Ok(())
        }
        Commands::Theme { theme } => {
            match theme {
                Some(theme) => {
                    let theme = theme.into();
                    instance.set_theme(theme)?;
                    println!("Theme set to {theme}.");
                }
                None => match instance.theme() {
                    Some(theme) => println!("{theme}"),
                    None => println!("No theme preference set."),
                },
            }
            Ok(())
        }
    }
}

fn require_login(instance: &Instance) -> Result<User, Box<dyn std::error::Error>> {
    instance
        .current_user()
        .ok_or_else(|| "not logged in (use `litelearn login`)".into())
}

fn show_course(instance: &Instance, course_id: &str) -> CommandResult {
    let course: Course = instance
        .catalog()
        .get(course_id)
        .cloned()
        .ok_or_else(|| format!("unknown course: {course_id}"))?;

    println!("{} ({})", course.title, course.level);
    println!("{}", course.description);
    println!(
        "Tags: {}",
        course
            .tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ")
    );

    let record = instance
        .current_user()
        .and_then(|user| instance.enrollment(&user.email, &course.id));
    for (index, title) in course.lessons.iter().enumerate() {
        let done = record
            .as_ref()
            .and_then(|r| r.completed.get(index).copied())
            .unwrap_or(false);
        println!("  {:>2}. [{}] {title}", index + 1, if done { "x" } else { " " });
    }
    match record {
        Some(record) => println!("Progress: {}%", record.percent()),
        None => println!("Not enrolled. `litelearn enroll {course_id}` to start."),
    }
    Ok(())
}
