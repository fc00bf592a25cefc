pub mod error;

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use rrnorm_core::config::OutputConfig;
use rrnorm_rfc::rfc::rrule::{RawOptions, normalize_at};

use crate::error::AppResult;

/// ## Summary
/// Reads the option document from `path`, or from stdin when `path` is
/// `None` or `-`.
///
/// ## Errors
/// Returns `InputError` if the source cannot be read.
pub fn read_input(path: Option<&Path>) -> AppResult<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "Reading options from file");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            tracing::debug!("Reading options from stdin");
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// ## Summary
/// Normalizes a JSON option document and renders the result as JSON.
///
/// ## Errors
/// Returns an error if the document is malformed, fails validation, or the
/// result cannot be serialized.
pub fn render(input: &str, now: DateTime<Utc>, output: &OutputConfig) -> AppResult<String> {
    let raw = RawOptions::from_json(input)?;
    let normalized = normalize_at(raw, now)?;

    tracing::info!(
        freq = %normalized.options.freq,
        dtstart = %normalized.options.dtstart,
        "Options normalized"
    );

    Ok(if output.pretty {
        serde_json::to_string_pretty(&normalized)?
    } else {
        serde_json::to_string(&normalized)?
    })
}
