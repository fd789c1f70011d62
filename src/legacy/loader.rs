//! Reader for the consolidated legacy services document.
//!
//! The document is a JSON object with one array field (by default
//! `blocked_services`) listing every service record:
//!
//! ```json
//! { "blocked_services": [ { "id": "youtube", "name": "YouTube", "rules": ["||youtube.com^"] } ] }
//! ```
//!
//! # Implementation Notes
//! - Field order inside records is preserved (`serde_json` with `preserve_order`)
//! - A missing or non-array field is reported as [`LegacyDocument::NotAnArray`], not as an error
//! - Elements without a string `id` are skipped with a warning

use anyhow::{Context, Result};
use log::warn;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::models::ServiceRecord;

/// Outcome of reading a legacy document that was readable and valid JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyDocument {
    Records(Vec<ServiceRecord>),
    NotAnArray,
}

/// Reads and parses the legacy document at `path`.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid JSON.
pub fn load_legacy_document(path: &Path, array_key: &str) -> Result<LegacyDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read legacy document {:?}", path))?;
    parse_legacy_document(&content, array_key)
        .with_context(|| format!("Failed to parse legacy document {:?}", path))
}

/// Parses legacy document text, extracting the records under `array_key`.
pub fn parse_legacy_document(content: &str, array_key: &str) -> Result<LegacyDocument> {
    let mut document: Value = serde_json::from_str(content)?;

    let Some(Value::Array(entries)) = document.get_mut(array_key).map(Value::take) else {
        return Ok(LegacyDocument::NotAnArray);
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match ServiceRecord::from_value(entry) {
            Some(record) => records.push(record),
            None => warn!(
                "Skipping {}[{}]: entry is not an object with a string id",
                array_key, index
            ),
        }
    }

    Ok(LegacyDocument::Records(records))
}
