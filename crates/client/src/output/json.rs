//! JSON output formatting.

use serde::Serialize;

/// Format a value as compact JSON, matching the server's wire shape.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use exertrack_core::tracker::LogEntryResponse;

    #[test]
    fn test_format_log_entries_as_json() {
        let entries = [LogEntryResponse {
            description: "run".to_string(),
            duration: 30,
            date: "Fri Jan 05 2024".to_string(),
        }];

        assert_eq!(
            format_json(&entries[..]),
            r#"[{"description":"run","duration":30,"date":"Fri Jan 05 2024"}]"#
        );
    }
}
