use std::sync::Arc;

use async_trait::async_trait;
use mh_common::StoreError;

use mh_config::store::{write_flag, AUTO_KEY};
use mh_config::MemoryStore;
use mh_engine::highlight::highlight_name;
use mh_engine::minimap::{DrawOp, Viewport};
use mh_engine::{Document, FrameContent, WalkPolicy};
use serde_json::{json, Value};

use super::*;
use crate::layout::overlay_host;

fn store(scroll_marks: bool) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::from_value(json!({
        "currentKey": "words1",
        "scrollMarks": scroll_marks,
        "words1": [
            { "word": "cat", "color": "#ff0", "matchCase": false, "wholeWord": false }
        ]
    })))
}

fn shell(store: Arc<MemoryStore>) -> Shell {
    Shell::new(store, ScanOptions::default(), Duration::from_secs(60))
}

/// Top page with one match, a framed page with two (one of them inside a
/// frame of its own) and an unreachable frame.
fn framed_page() -> Document {
    let mut deep = Document::new("html");
    let root = deep.root();
    deep.append_text(root, "deep cat").unwrap();

    let mut inner = Document::new("html");
    let root = inner.root();
    inner.append_text(root, "inner cat").unwrap();
    let frame = inner.append_element(root, "iframe").unwrap();
    inner
        .set_frame(frame, FrameContent::Document(Box::new(deep)))
        .unwrap();

    let mut doc = Document::new("html");
    let body = doc.append_element(doc.root(), "body").unwrap();
    doc.append_text(body, "top cat").unwrap();
    let frame = doc.append_element(body, "iframe").unwrap();
    doc.set_frame(frame, FrameContent::Document(Box::new(inner)))
        .unwrap();
    let blocked = doc.append_element(body, "iframe").unwrap();
    doc.set_frame(blocked, FrameContent::Unreachable).unwrap();
    doc
}

fn open(shell: &Shell, url: Option<&str>, doc: Document) -> Tab {
    let host = overlay_host(&doc, WalkPolicy::default(), 400.0, 0.0);
    shell.open_tab(1, url.map(str::to_string), doc, host)
}

#[tokio::test]
async fn dispatch_sums_frames_and_shows_badge() {
    let shell = shell(store(false));
    let mut tab = open(&shell, Some("https://example.com/"), framed_page());

    let report = shell.dispatch(&mut tab).await.unwrap();
    assert_eq!(report.counts, vec![1, 1, 1, 0]);
    assert_eq!(report.total, 3);
    assert_eq!(shell.badge().text(1), "3");

    let name = highlight_name(0);
    assert_eq!(tab.layer().highlight(&name).unwrap().ranges.len(), 1);
    assert_eq!(tab.frame_layer(0).unwrap().highlight(&name).unwrap().ranges.len(), 1);
    assert_eq!(tab.frame_layer(1).unwrap().highlight(&name).unwrap().ranges.len(), 1);
    assert_eq!(tab.frame_layer(2).unwrap().highlights().count(), 0);
}

#[tokio::test]
async fn repeated_dispatch_reports_same_count() {
    let shell = shell(store(false));
    let mut tab = open(&shell, Some("https://example.com/"), framed_page());

    let first = shell.dispatch(&mut tab).await.unwrap();
    let second = shell.dispatch(&mut tab).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(tab.layer().highlights().count(), 1);
}

#[test]
fn url_filter() {
    assert!(url_allowed(Some("https://example.com/")));
    assert!(url_allowed(Some("http://example.com/")));
    assert!(url_allowed(Some("file:///tmp/page.html")));
    assert!(!url_allowed(Some("view-source:https://example.com/")));
    assert!(!url_allowed(Some("chrome-extension://abc/options.html")));
    assert!(!url_allowed(None));
}

#[tokio::test]
async fn filtered_tab_is_not_scanned() {
    let shell = shell(store(false));
    let mut tab = open(&shell, Some("view-source:https://example.com/"), framed_page());

    assert!(shell.dispatch(&mut tab).await.is_none());
    assert_eq!(tab.layer().highlights().count(), 0);
    assert_eq!(shell.badge().text(1), "");
}

#[tokio::test]
async fn no_selected_list_counts_zero() {
    let shell = shell(Arc::new(MemoryStore::new()));
    let mut tab = open(&shell, Some("https://example.com/"), framed_page());

    let report = shell.dispatch(&mut tab).await.unwrap();
    assert_eq!(report.total, 0);
    assert_eq!(shell.badge().text(1), "0");
}

struct UnreadableStore;

#[async_trait]
impl EntryStore for UnreadableStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "store file is not readable",
        )))
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only".into()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only".into()))
    }
}

#[tokio::test]
async fn store_failure_still_shows_zero_badge() {
    let shell = Shell::new(
        Arc::new(UnreadableStore),
        ScanOptions::default(),
        Duration::from_secs(60),
    );
    let mut tab = open(&shell, Some("https://example.com/"), framed_page());

    let report = shell.dispatch(&mut tab).await.unwrap();
    assert_eq!(report.counts, vec![0, 0, 0, 0]);
    assert_eq!(report.total, 0);
    assert_eq!(shell.badge().text(1), "0");
    assert_eq!(tab.layer().highlights().count(), 0);

    // Auto mode cannot be read either, so tab updates are ignored.
    assert!(shell.on_tab_updated(&mut tab, TabStatus::Complete).await.is_none());
}

#[tokio::test]
async fn tab_update_respects_auto_flag() {
    let store = store(false);
    let shell = shell(store.clone());
    let mut tab = open(&shell, Some("https://example.com/"), framed_page());

    assert!(shell.on_tab_updated(&mut tab, TabStatus::Complete).await.is_none());

    write_flag(store.as_ref(), AUTO_KEY, true).await.unwrap();
    assert!(shell.on_tab_updated(&mut tab, TabStatus::Loading).await.is_none());
    let report = shell.on_tab_updated(&mut tab, TabStatus::Complete).await.unwrap();
    assert_eq!(report.total, 3);

    let mut internal = open(&shell, Some("chrome://settings"), framed_page());
    assert!(shell
        .on_tab_updated(&mut internal, TabStatus::Complete)
        .await
        .is_none());

    let mut blank = open(&shell, None, framed_page());
    assert!(shell.on_tab_updated(&mut blank, TabStatus::Complete).await.is_none());
}

#[tokio::test]
async fn minimap_only_in_top_frame() {
    let shell = shell(store(true));
    let mut tab = open(&shell, Some("https://example.com/"), framed_page());

    shell.dispatch(&mut tab).await.unwrap();
    let overlay = tab.minimap_overlay().unwrap();
    assert_eq!(overlay.frame.as_ref().unwrap().tick_count(), 1);
}

#[tokio::test]
async fn resize_redraws_minimap() {
    let shell = shell(store(true));
    let mut tab = open(&shell, Some("https://example.com/"), framed_page());
    shell.dispatch(&mut tab).await.unwrap();
    assert_eq!(tab.minimap_overlay().unwrap().paints, 1);

    tab.resize(Viewport {
        client_height: 300.0,
        scroll_top: 0.0,
        document_height: 400.0,
    });
    let overlay = tab.minimap_overlay().unwrap();
    assert_eq!(overlay.paints, 2);
    assert_eq!(overlay.frame.as_ref().unwrap().height, 300.0);
}

fn tick_tops(tab: &Tab) -> Vec<f64> {
    let frame = tab.minimap_overlay().unwrap().frame.as_ref().unwrap();
    frame
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillRect { y, color, .. } if color == "#ff0" => Some(*y),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn scrolling_keeps_ticks_at_document_position() {
    let shell = shell(store(true));
    let mut tab = open(&shell, Some("https://example.com/"), framed_page());
    shell.dispatch(&mut tab).await.unwrap();

    tab.resize(Viewport {
        client_height: 400.0,
        scroll_top: 0.0,
        document_height: 400.0,
    });
    let at_top = tick_tops(&tab);
    assert_eq!(at_top.len(), 1);

    tab.resize(Viewport {
        client_height: 400.0,
        scroll_top: 20.0,
        document_height: 400.0,
    });
    assert_eq!(tick_tops(&tab), at_top);
}

#[tokio::test]
async fn resize_without_minimap_is_noop() {
    let shell = shell(store(false));
    let mut tab = open(&shell, Some("https://example.com/"), framed_page());
    shell.dispatch(&mut tab).await.unwrap();

    tab.resize(Viewport {
        client_height: 300.0,
        scroll_top: 0.0,
        document_height: 400.0,
    });
    assert!(tab.minimap_overlay().is_none());
}

#[test]
fn nested_contexts_are_depth_first() {
    let doc = framed_page();
    let frames = nested_contexts(&doc);
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].unwrap().text_content(frames[0].unwrap().root()), "inner cat");
    assert_eq!(frames[1].unwrap().text_content(frames[1].unwrap().root()), "deep cat");
    assert!(frames[2].is_none());
}
