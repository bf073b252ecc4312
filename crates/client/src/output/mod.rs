//! Output formatting functions.

pub mod json;
pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Renders a response as compact JSON, or through `pretty` for human output.
///
/// Quiet pretty output may render to an empty string; see [`emit`].
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> String
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}

/// Prints rendered output, skipping empty renders.
pub fn emit(rendered: &str) {
    if !rendered.is_empty() {
        println!("{rendered}");
    }
}
