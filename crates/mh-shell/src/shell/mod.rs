//! The host shell: decides when a tab is scanned, runs one scan per frame,
//! sums the per-frame counts and shows the total on the tab's badge.

mod badge;

use std::sync::Arc;
use std::time::Duration;

use mh_config::store::{read_flag, AUTO_KEY};
use mh_config::{EntryStore, MhConfig};
use mh_engine::minimap::{MountedOverlay, Viewport, OVERLAY_ID};
use mh_engine::{
    Document, FrameContent, MemoryOverlayHost, MemoryRenderLayer, Minimap, ScanOptions,
    ScanTarget, Scanner, TopLevel, WalkPolicy,
};
use tracing::{debug, info, warn};

pub use badge::Badge;

/// Load state reported with a tab update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStatus {
    Loading,
    Complete,
}

/// A loaded page plus the rendering state of each of its contexts.
pub struct Tab {
    pub id: u32,
    pub url: Option<String>,
    document: Document,
    layer: MemoryRenderLayer,
    /// One layer per nested frame, in [`nested_contexts`] order.
    frame_layers: Vec<MemoryRenderLayer>,
    minimap: Minimap,
    host: MemoryOverlayHost,
    walk: WalkPolicy,
}

impl Tab {
    #[cfg(test)]
    pub fn layer(&self) -> &MemoryRenderLayer {
        &self.layer
    }

    #[cfg(test)]
    pub fn frame_layer(&self, index: usize) -> Option<&MemoryRenderLayer> {
        self.frame_layers.get(index)
    }

    /// The mounted minimap, if any.
    pub fn minimap_overlay(&self) -> Option<&MountedOverlay> {
        self.host.overlay(OVERLAY_ID)
    }

    /// Apply a new viewport, re-place the text nodes for its scroll offset
    /// and redraw the minimap if it is showing.
    pub fn resize(&mut self, viewport: Viewport) {
        self.host.set_viewport(viewport);
        crate::layout::place_text_nodes(
            &mut self.host,
            &self.document,
            self.walk,
            viewport.scroll_top,
        );
        if !self.minimap.is_active() {
            return;
        }
        if let Err(e) = self.minimap.handle_resize(&mut self.host) {
            warn!(tab = self.id, error = %e, "minimap redraw failed");
        }
    }
}

/// Per-context counts of one dispatch; `counts[0]` is the top frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub counts: Vec<usize>,
    pub total: usize,
}

pub struct Shell {
    store: Arc<dyn EntryStore>,
    options: ScanOptions,
    scanner: Scanner,
    badge: Badge,
    clear_after: Duration,
}

impl Shell {
    pub fn new(store: Arc<dyn EntryStore>, options: ScanOptions, clear_after: Duration) -> Self {
        Self {
            store,
            options,
            scanner: Scanner::new(options),
            badge: Badge::new(),
            clear_after,
        }
    }

    pub fn from_config(store: Arc<dyn EntryStore>, config: &MhConfig) -> Self {
        Self::new(
            store,
            ScanOptions::from(config),
            Duration::from_millis(u64::from(config.badge.clear_after_ms)),
        )
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    pub fn badge(&self) -> &Badge {
        &self.badge
    }

    pub fn open_tab(
        &self,
        id: u32,
        url: Option<String>,
        document: Document,
        host: MemoryOverlayHost,
    ) -> Tab {
        Tab {
            id,
            url,
            document,
            layer: MemoryRenderLayer::new(),
            frame_layers: Vec::new(),
            minimap: Minimap::new(self.options.minimap),
            host,
            walk: self.options.walk,
        }
    }

    /// Scan every context of `tab` and show the total on its badge.
    ///
    /// Returns `None` when the tab's URL is filtered out.
    pub async fn dispatch(&self, tab: &mut Tab) -> Option<DispatchReport> {
        if !url_allowed(tab.url.as_deref()) {
            debug!(tab = tab.id, url = ?tab.url, "tab skipped by url filter");
            return None;
        }

        let Tab {
            id,
            document,
            layer,
            frame_layers,
            minimap,
            host,
            ..
        } = tab;
        let store = self.store.as_ref();

        let top = self
            .scanner
            .scan(
                store,
                ScanTarget {
                    document: &*document,
                    layer,
                    top_level: Some(TopLevel { minimap, host }),
                },
            )
            .await;
        let mut counts = vec![top.count];

        let nested = nested_contexts(&*document);
        frame_layers.resize_with(nested.len(), MemoryRenderLayer::new);
        for (frame, layer) in nested.into_iter().zip(frame_layers.iter_mut()) {
            let count = match frame {
                Some(document) => {
                    let target = ScanTarget {
                        document,
                        layer,
                        top_level: None,
                    };
                    self.scanner.scan(store, target).await.count
                }
                None => {
                    debug!(tab = *id, "frame not reachable, counted as zero");
                    0
                }
            };
            counts.push(count);
        }

        let total = counts.iter().sum();
        self.badge.show(*id, total, self.clear_after);
        info!(tab = *id, total, contexts = counts.len(), "tab highlighted");
        Some(DispatchReport { counts, total })
    }

    /// Scan a tab that finished loading, when auto mode is on.
    pub async fn on_tab_updated(&self, tab: &mut Tab, status: TabStatus) -> Option<DispatchReport> {
        if status != TabStatus::Complete {
            return None;
        }
        match tab.url.as_deref().and_then(url_scheme) {
            Some(scheme) if !scheme.eq_ignore_ascii_case("chrome") => {}
            _ => return None,
        }
        match read_flag(self.store.as_ref(), AUTO_KEY).await {
            Ok(true) => self.dispatch(tab).await,
            Ok(false) => None,
            Err(e) => {
                warn!(error = %e, "could not read auto flag");
                None
            }
        }
    }
}

/// Pages with a long scheme (`view-source:`, `chrome-extension:`, ...) are
/// never scanned.
pub fn url_allowed(url: Option<&str>) -> bool {
    match url {
        Some(url) => url.find(':').map_or(true, |i| i <= 5),
        None => false,
    }
}

fn url_scheme(url: &str) -> Option<&str> {
    url.split_once(':')
        .map(|(scheme, _)| scheme)
        .filter(|s| !s.is_empty())
}

/// Every nested frame below `doc`, depth first. Unreachable frames are
/// `None`.
pub fn nested_contexts(doc: &Document) -> Vec<Option<&Document>> {
    let mut out = Vec::new();
    collect_frames(doc, &mut out);
    out
}

fn collect_frames<'a>(doc: &'a Document, out: &mut Vec<Option<&'a Document>>) {
    for (_, content) in doc.frames() {
        match content {
            FrameContent::Document(inner) => {
                out.push(Some(inner.as_ref()));
                collect_frames(inner, out);
            }
            FrameContent::Unreachable => out.push(None),
        }
    }
}

#[cfg(test)]
mod tests;
