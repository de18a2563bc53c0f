//! Tests for the entry store backends and helpers.

use super::*;
use serde_json::json;

fn seeded() -> MemoryStore {
    MemoryStore::from_value(json!({
        "currentKey": "words2",
        "scrollMarks": true,
        "words1": [{"word": "one", "color": "#111111"}],
        "words2": [
            {"word": "cat", "re": false, "color": "#ff0000", "matchCase": false, "wholeWord": true},
            {"word": "/do+g/i", "re": true, "color": "#00ff00"}
        ]
    }))
}

#[tokio::test]
async fn load_active_reads_selected_list() {
    let store = seeded();
    let active = load_active(&store).await.unwrap().unwrap();
    assert_eq!(active.key, "words2");
    assert!(active.scroll_marks);
    assert_eq!(active.entries.len(), 2);
    assert!(active.entries[0].whole_word);
    assert!(active.entries[1].re);
}

#[tokio::test]
async fn load_active_without_selection_is_none() {
    let store = MemoryStore::from_value(json!({"words1": []}));
    assert!(load_active(&store).await.unwrap().is_none());
}

#[tokio::test]
async fn load_active_with_missing_list_is_empty() {
    let store = MemoryStore::from_value(json!({"currentKey": "words3"}));
    let active = load_active(&store).await.unwrap().unwrap();
    assert!(active.entries.is_empty());
    assert!(!active.scroll_marks);
}

#[tokio::test]
async fn load_active_with_malformed_list_is_empty() {
    let store = MemoryStore::from_value(json!({"currentKey": "words1", "words1": "nope"}));
    let active = load_active(&store).await.unwrap().unwrap();
    assert!(active.entries.is_empty());
}

#[tokio::test]
async fn flags_only_true_when_boolean_true() {
    let store = MemoryStore::from_value(json!({"auto": "yes", "scrollMarks": 1}));
    assert!(!read_flag(&store, AUTO_KEY).await.unwrap());
    assert!(!read_flag(&store, SCROLL_MARKS_KEY).await.unwrap());
    write_flag(&store, AUTO_KEY, true).await.unwrap();
    assert!(read_flag(&store, AUTO_KEY).await.unwrap());
}

#[tokio::test]
async fn migrate_moves_legacy_words() {
    let store = MemoryStore::from_value(json!({"words": [{"word": "old"}]}));
    let key = migrate_legacy(&store).await.unwrap();
    assert_eq!(key, "words1");
    assert!(store.get(LEGACY_WORDS_KEY).await.unwrap().is_none());
    let entries = load_entries(&store, "words1").await.unwrap();
    assert_eq!(entries[0].word, "old");
    assert_eq!(current_key(&store).await.unwrap().as_deref(), Some("words1"));
}

#[tokio::test]
async fn migrate_on_fresh_store_creates_empty_list() {
    let store = MemoryStore::new();
    assert_eq!(migrate_legacy(&store).await.unwrap(), "words1");
    assert!(load_entries(&store, "words1").await.unwrap().is_empty());
}

#[tokio::test]
async fn migrate_keeps_existing_selection() {
    let store = seeded();
    assert_eq!(migrate_legacy(&store).await.unwrap(), "words2");
    assert!(store.get("words1").await.unwrap().is_some());
}

#[tokio::test]
async fn file_store_round_trips_values() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("store.json"));

    assert!(store.get(CURRENT_KEY).await.unwrap().is_none());

    let entries = vec![SearchEntry::literal("cat", "#ff0000").with_whole_word(true)];
    save_entries(&store, "words1", &entries).await.unwrap();
    select_list(&store, "words1").await.unwrap();

    let active = load_active(&store).await.unwrap().unwrap();
    assert_eq!(active.entries, entries);

    store.remove("words1").await.unwrap();
    assert!(store.get("words1").await.unwrap().is_none());
}

#[tokio::test]
async fn file_store_rejects_non_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    let store = JsonFileStore::new(&path);
    assert!(matches!(
        store.get(CURRENT_KEY).await,
        Err(StoreError::InvalidFormat(_))
    ));
}

#[tokio::test]
async fn file_store_reports_corrupt_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = JsonFileStore::new(&path);
    assert!(matches!(store.get(CURRENT_KEY).await, Err(StoreError::Decode(_))));
}

#[tokio::test]
async fn file_store_unreadable_path_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    assert!(matches!(
        store.get(CURRENT_KEY).await,
        Err(StoreError::Unavailable(_))
    ));
    assert!(load_active(&store).await.is_err());
}

#[tokio::test]
async fn append_keeps_existing_entries() {
    let store = seeded();
    let typed = SearchEntry::from_typed("/b.rd/i", "#0000ff", true, false);
    assert_eq!(append_entry(&store, "words2", typed).await.unwrap(), 3);

    let entries = load_entries(&store, "words2").await.unwrap();
    assert_eq!(entries[0].word, "cat");
    assert!(entries[2].re);
    assert!(!entries[2].match_case);

    assert_eq!(
        append_entry(&store, "words9", SearchEntry::literal("new", "#000000"))
            .await
            .unwrap(),
        1
    );
}

#[test]
fn list_key_is_one_based() {
    assert_eq!(list_key(1), "words1");
    assert_eq!(list_key(4), "words4");
}
