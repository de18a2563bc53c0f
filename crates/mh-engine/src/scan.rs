//! One scan of one document: load entries, walk, match, paint, count.
//!
//! The only suspend point is the entry-store read in [`Scanner::prepare`].
//! Everything after it runs synchronously, so the page cannot change under
//! a scan in progress.

use mh_config::store::{load_active, EntryStore};
use mh_config::SearchEntry;
use tracing::{debug, info, warn};

use crate::dom::Document;
use crate::fold::FoldedText;
use crate::highlight::{apply_highlights, RenderLayer};
use crate::matcher::find_spans;
use crate::minimap::{Minimap, MinimapSettings, OverlayHost};
use crate::normalize::{normalize, NormalizedEntries};
use crate::range::EntryMatches;
use crate::walker::{TextNodes, WalkPolicy};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub walk: WalkPolicy,
    pub minimap: MinimapSettings,
}

impl From<&mh_config::MhConfig> for ScanOptions {
    fn from(config: &mh_config::MhConfig) -> Self {
        Self {
            walk: WalkPolicy {
                skip_foreign_namespaces: config.walker.skip_foreign_namespaces,
            },
            minimap: MinimapSettings::from(&config.minimap),
        }
    }
}

/// Total number of matches across all entries; what the shell displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub count: usize,
}

/// Minimap state and geometry, present only in the top-level context.
pub struct TopLevel<'a> {
    pub minimap: &'a mut Minimap,
    pub host: &'a mut dyn OverlayHost,
}

/// The page context a scan paints into.
pub struct ScanTarget<'a> {
    pub document: &'a Document,
    pub layer: &'a mut dyn RenderLayer,
    /// `None` for nested frames.
    pub top_level: Option<TopLevel<'a>>,
}

/// Entries ready to run, produced by the configuration read.
#[derive(Debug, Clone, Default)]
pub struct PreparedScan {
    /// `None` when there is nothing to do: no list selected or the store
    /// could not be read.
    entries: Option<NormalizedEntries>,
    scroll_marks: bool,
}

impl PreparedScan {
    pub fn from_entries(entries: &[SearchEntry], scroll_marks: bool) -> Self {
        Self {
            entries: Some(normalize(entries)),
            scroll_marks,
        }
    }

    pub fn skipped() -> Self {
        Self::default()
    }

    pub fn is_skipped(&self) -> bool {
        self.entries.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Read the active list from the store and normalize it.
    pub async fn prepare(&self, store: &dyn EntryStore) -> PreparedScan {
        match load_active(store).await {
            Ok(Some(active)) => PreparedScan::from_entries(&active.entries, active.scroll_marks),
            Ok(None) => PreparedScan::skipped(),
            Err(e) => {
                warn!(error = %e, "entry store unavailable, scan reports no matches");
                PreparedScan::skipped()
            }
        }
    }

    /// Load entries, then scan `target` with them.
    pub async fn scan(&self, store: &dyn EntryStore, target: ScanTarget<'_>) -> ScanResult {
        let prepared = self.prepare(store).await;
        self.run(&prepared, target)
    }

    /// Match every entry against every scannable text node.
    ///
    /// The result has one element per normalized entry, in list order.
    pub fn collect(&self, document: &Document, entries: &NormalizedEntries) -> Vec<EntryMatches> {
        let mut matches: Vec<EntryMatches> = entries
            .entries
            .iter()
            .map(|e| EntryMatches::new(e.index, e.color.clone()))
            .collect();
        if entries.is_empty() {
            return matches;
        }

        let mut nodes = 0usize;
        for node in TextNodes::new(document, self.options.walk) {
            let Some(text) = document.text(node).filter(|t| !t.is_empty()) else {
                continue;
            };
            nodes += 1;
            let folded = entries.needs_case_fold.then(|| FoldedText::new(text));
            for (entry, acc) in entries.entries.iter().zip(matches.iter_mut()) {
                let spans = find_spans(text, folded.as_ref(), &entry.matcher);
                acc.ranges.extend_from_spans(node, &spans);
            }
        }
        debug!(nodes, entries = entries.len(), "document walked");
        matches
    }

    /// Run a prepared scan against one page context.
    pub fn run(&self, prepared: &PreparedScan, target: ScanTarget<'_>) -> ScanResult {
        let Some(entries) = &prepared.entries else {
            return ScanResult::default();
        };

        let matches = self.collect(target.document, entries);
        let count = apply_highlights(target.layer, &matches);

        if let Some(top) = target.top_level {
            let shown = prepared.scroll_marks.then_some(matches.as_slice());
            if let Err(e) = top.minimap.update(top.host, shown) {
                warn!(error = %e, "minimap update failed");
            }
        }

        info!(count, "scan complete");
        ScanResult { count }
    }
}
