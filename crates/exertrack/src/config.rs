use std::{env, path::PathBuf, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "exertrack.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Delete every user and log at startup (default: false)
    pub reset_on_start: bool,
    /// Directory served under `/public` (default: the crate's `public/` directory)
    pub public_dir: PathBuf,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "exertrack.db")
    /// - `RESET_ON_START` - `true`/`1`/`yes` to wipe storage at startup (default: false)
    /// - `PUBLIC_DIR` - Static asset directory (default: `<crate>/public`)
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "exertrack.db".to_string()),
            reset_on_start: env::var("RESET_ON_START")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            sqlite_path: "test.db".to_string(),
            reset_on_start: false,
            public_dir: PathBuf::from("public"),
            request_timeout_secs: 30,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("RESET_ON_START");
        env::remove_var("PUBLIC_DIR");
        env::remove_var("REQUEST_TIMEOUT_SECS");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "exertrack.db");
        assert!(!config.reset_on_start);
        assert!(config.public_dir.ends_with("public"));
        assert_eq!(config.request_timeout_secs, 10);
    }
}
