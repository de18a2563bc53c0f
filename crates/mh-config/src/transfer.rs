//! Entry list import and export.
//!
//! Lists travel as a plain JSON array of records. Export mirrors what the
//! editor saves: blank words are dropped and regex records carry no
//! `matchCase` / `wholeWord` fields.

use mh_common::StoreError;
use serde::Serialize;
use serde_json::Value;

use crate::entry::SearchEntry;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRecord<'a> {
    re: bool,
    word: &'a str,
    color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    match_case: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    whole_word: Option<bool>,
}

impl<'a> From<&'a SearchEntry> for ExportRecord<'a> {
    fn from(entry: &'a SearchEntry) -> Self {
        let literal = |flag| (!entry.re).then_some(flag);
        Self {
            re: entry.re,
            word: &entry.word,
            color: &entry.color,
            match_case: literal(entry.match_case),
            whole_word: literal(entry.whole_word),
        }
    }
}

/// Serialize a list for the clipboard or a file.
pub fn export_entries(entries: &[SearchEntry]) -> Result<String, StoreError> {
    let records: Vec<ExportRecord<'_>> = entries
        .iter()
        .filter(|e| !e.word.is_empty())
        .map(ExportRecord::from)
        .collect();
    Ok(serde_json::to_string(&records)?)
}

/// Parse an exported list. Anything but a JSON array is rejected.
pub fn import_entries(text: &str) -> Result<Vec<SearchEntry>, StoreError> {
    match serde_json::from_str::<Value>(text)? {
        value @ Value::Array(_) => Ok(serde_json::from_value(value)?),
        other => Err(StoreError::InvalidFormat(format!(
            "expected an array of entries, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
