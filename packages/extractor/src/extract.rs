//! Convenience entry points: XML text or file in, summary or JSON out.

use std::fs;
use std::path::Path;

use roxmltree::Document;

use crate::config::validate_input_path;
use crate::document::Forecast;
use crate::error::Result;
use crate::summary::{summarize, ForecastSummary};

/// Parse DWML text and summarize it.
///
/// # Examples
/// ```
/// use dwml_extractor::extract_str;
///
/// let summary = extract_str("<dwml><data/></dwml>").unwrap();
/// assert!(summary.parameters.is_empty());
/// ```
pub fn extract_str(xml: &str) -> Result<ForecastSummary> {
    let tree = Document::parse(xml)?;
    let forecast = Forecast::new(&tree)?;
    summarize(&forecast)
}

/// Read the text of a DWML input file after checking that it is a file.
pub fn read_input(path: &Path) -> Result<String> {
    validate_input_path(path)?;
    let xml = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = xml.len(), "Read input");
    Ok(xml)
}

/// Read a DWML file and summarize it.
pub fn extract_file(path: &Path) -> Result<ForecastSummary> {
    extract_str(&read_input(path)?)
}

/// Serialize a summary to JSON.
pub fn to_json(summary: &ForecastSummary, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(summary)?
    } else {
        serde_json::to_string(summary)?
    };
    Ok(json)
}

/// Write a summary as JSON to `path`, replacing any existing file.
pub fn write_json(summary: &ForecastSummary, path: &Path, pretty: bool) -> Result<()> {
    let mut json = to_json(summary, pretty)?;
    json.push('\n');
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "Wrote JSON summary");
    Ok(())
}
