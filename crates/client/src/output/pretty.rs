//! Pretty output formatting.

use exertrack_core::tracker::{ExerciseResponse, LogResponse, UserResponse};

/// Format a user for display.
pub fn format_user(user: &UserResponse) -> String {
    format!("{}\n  ID: {}", user.username, user.id)
}

/// Format users for display.
pub fn format_users(users: &[UserResponse]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let mut output = format!("USERS ({})\n", users.len());
    output.push_str(&"-".repeat(40));
    for user in users {
        output.push_str(&format!("\n{}", format_user(user)));
        output.push('\n');
    }
    output
}

/// Format a newly added exercise for display.
pub fn format_exercise(exercise: &ExerciseResponse) -> String {
    format!(
        "{} ({} min) on {}\n  User: {} ({})",
        exercise.description, exercise.duration, exercise.date, exercise.username, exercise.id
    )
}

/// Format a log for display.
pub fn format_log(log: &LogResponse) -> String {
    let mut output = format!("LOG for {} ({})", log.username, log.id);
    match (&log.from, &log.to) {
        (Some(from), Some(to)) => output.push_str(&format!("\n  From {from} to {to}")),
        (Some(from), None) => output.push_str(&format!("\n  From {from}")),
        (None, Some(to)) => output.push_str(&format!("\n  Until {to}")),
        (None, None) => {}
    }
    output.push_str(&format!("\n  Entries: {}\n", log.count));
    output.push_str(&"-".repeat(40));
    if log.log.is_empty() {
        output.push_str("\nNo exercises found.");
        return output;
    }
    for entry in &log.log {
        output.push_str(&format!(
            "\n{}  {:>4} min  {}",
            entry.date, entry.duration, entry.description
        ));
    }
    output
}
