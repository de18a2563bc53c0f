//! One-time upgrade from the single-list storage layout.

use mh_common::StoreError;
use serde_json::Value;
use tracing::info;

use super::{current_key, list_key, select_list, EntryStore, LEGACY_WORDS_KEY};

/// Ensure a list is selected, moving a legacy `words` list to `words1`.
///
/// Returns the selected key. Stores that already have a `currentKey` are
/// left untouched.
pub async fn migrate_legacy(store: &dyn EntryStore) -> Result<String, StoreError> {
    if let Some(key) = current_key(store).await? {
        return Ok(key);
    }

    let legacy = store
        .get(LEGACY_WORDS_KEY)
        .await?
        .filter(Value::is_array)
        .unwrap_or_else(|| Value::Array(Vec::new()));
    let key = list_key(1);

    store.remove(LEGACY_WORDS_KEY).await?;
    store.set(&key, legacy).await?;
    select_list(store, &key).await?;
    info!(key = %key, "initialized entry store");
    Ok(key)
}
