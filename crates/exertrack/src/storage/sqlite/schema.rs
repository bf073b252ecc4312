//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Dates are stored as `YYYY-MM-DD` text so that string
//! comparison orders them correctly.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Users table
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    username TEXT NOT NULL CHECK (length(trim(username)) > 0),
    created_at TEXT NOT NULL
);

-- Exercise log, one row per entry. The autoincrement id is the insertion order.
CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    description TEXT NOT NULL,
    duration INTEGER NOT NULL CHECK (duration >= 0),
    date TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_exercises_user_id ON exercises(user_id);
CREATE INDEX IF NOT EXISTS idx_exercises_user_date ON exercises(user_id, date);
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (id, username, created_at)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, username
FROM users
WHERE id = ?1
"#;

pub const SELECT_ALL_USERS: &str = r#"
SELECT id, username
FROM users
ORDER BY rowid ASC
"#;

pub const DELETE_ALL: &str = r#"
DELETE FROM exercises;
DELETE FROM users;
"#;

// Exercise queries
pub const INSERT_EXERCISE: &str = r#"
INSERT INTO exercises (user_id, description, duration, date)
VALUES (?1, ?2, ?3, ?4)
"#;

/// Base selection for a user's log. Filters and ordering are appended by
/// [`super::query::build_log_query`].
pub const SELECT_LOG_BASE: &str =
    "SELECT id, description, duration, date FROM exercises WHERE user_id = ?";
