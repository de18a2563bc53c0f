//! Key-value entry store.
//!
//! The store is an opaque map of string keys to JSON values, shaped the way
//! the options editor persists it:
//!
//! - `currentKey`: name of the active list (`words1`, `words2`, ...)
//! - `words<N>`: an array of [`SearchEntry`] records
//! - `auto`: scan automatically on every completed page load
//! - `scrollMarks`: draw the match minimap
//!
//! Reads happen once at the start of a scan; the engine never writes.

mod file;
mod memory;
mod migrate;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use mh_common::StoreError;
use serde_json::Value;
use tracing::{debug, warn};

use crate::entry::SearchEntry;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use migrate::migrate_legacy;

pub const CURRENT_KEY: &str = "currentKey";
pub const AUTO_KEY: &str = "auto";
pub const SCROLL_MARKS_KEY: &str = "scrollMarks";
pub const LEGACY_WORDS_KEY: &str = "words";

/// Storage backend the engine and shell read from.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// The active entry list plus the scan-time flags stored beside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveList {
    pub key: String,
    pub entries: Vec<SearchEntry>,
    pub scroll_marks: bool,
}

/// Store key of the `n`th named list (1-based).
pub fn list_key(n: u32) -> String {
    format!("{LEGACY_WORDS_KEY}{n}")
}

/// Name of the selected list, if any.
pub async fn current_key(store: &dyn EntryStore) -> Result<Option<String>, StoreError> {
    Ok(store
        .get(CURRENT_KEY)
        .await?
        .and_then(|v| v.as_str().map(str::to_string))
        .filter(|k| !k.is_empty()))
}

/// Make `key` the selected list.
pub async fn select_list(store: &dyn EntryStore, key: &str) -> Result<(), StoreError> {
    store.set(CURRENT_KEY, Value::String(key.to_string())).await
}

/// Read a flag stored as a JSON value; anything but `true` is off.
pub async fn read_flag(store: &dyn EntryStore, key: &str) -> Result<bool, StoreError> {
    Ok(matches!(store.get(key).await?, Some(Value::Bool(true))))
}

pub async fn write_flag(store: &dyn EntryStore, key: &str, on: bool) -> Result<(), StoreError> {
    store.set(key, Value::Bool(on)).await
}

/// Read the entries stored under `key`. A missing key is an empty list.
pub async fn load_entries(
    store: &dyn EntryStore,
    key: &str,
) -> Result<Vec<SearchEntry>, StoreError> {
    match store.get(key).await? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

pub async fn save_entries(
    store: &dyn EntryStore,
    key: &str,
    entries: &[SearchEntry],
) -> Result<(), StoreError> {
    store.set(key, serde_json::to_value(entries)?).await
}

/// Append `entry` to the list under `key`; returns the new list length.
pub async fn append_entry(
    store: &dyn EntryStore,
    key: &str,
    entry: SearchEntry,
) -> Result<usize, StoreError> {
    let mut entries = load_entries(store, key).await?;
    entries.push(entry);
    save_entries(store, key, &entries).await?;
    Ok(entries.len())
}

/// Load everything a scan needs in one pass.
///
/// Returns `None` when no list is selected. Blank entries are kept here so
/// entry indices stay aligned with the stored list; the engine drops them.
pub async fn load_active(store: &dyn EntryStore) -> Result<Option<ActiveList>, StoreError> {
    let Some(key) = current_key(store).await? else {
        debug!("no entry list selected");
        return Ok(None);
    };
    let scroll_marks = read_flag(store, SCROLL_MARKS_KEY).await?;
    let entries = match load_entries(store, &key).await {
        Ok(entries) => entries,
        Err(StoreError::Decode(e)) => {
            warn!(key = %key, error = %e, "stored entry list is malformed, treating as empty");
            Vec::new()
        }
        Err(e) => return Err(e),
    };
    debug!(key = %key, entries = entries.len(), scroll_marks, "loaded active list");
    Ok(Some(ActiveList {
        key,
        entries,
        scroll_marks,
    }))
}
