//! Overlay highlighting.
//!
//! Matches are painted through the page's named-highlight registry and one
//! adopted stylesheet; node content and tree structure are never touched.
//! The registry and stylesheet list are shared by everything on the page,
//! so the engine only ever deletes or replaces names it owns (those starting
//! with [`HIGHLIGHT_PREFIX`]) and the sheet tagged [`STYLESHEET_OWNER`].

mod memory;
pub mod sanitize;
pub mod stylesheet;

use mh_common::RenderError;
use tracing::{debug, warn};

use crate::range::{EntryMatches, TextRange};

pub use memory::MemoryRenderLayer;
pub use stylesheet::generate_css;

/// Prefix of every highlight name the engine registers.
pub const HIGHLIGHT_PREFIX: &str = "mh-item-";

/// Tag identifying the engine's adopted stylesheet.
pub const STYLESHEET_OWNER: &str = "mh";

/// Name of the highlight layer for the entry at `index` in the stored list.
pub fn highlight_name(index: usize) -> String {
    format!("{HIGHLIGHT_PREFIX}{index}")
}

/// One named highlight: a set of ranges painted by one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub ranges: Vec<TextRange>,
    /// Higher priorities paint over lower ones where ranges overlap.
    pub priority: i32,
}

/// The page's highlight-rendering layer.
pub trait RenderLayer {
    /// Names of all registered highlights, the engine's and anyone else's.
    fn highlight_names(&self) -> Vec<String>;

    fn delete_highlight(&mut self, name: &str);

    fn set_highlight(&mut self, name: &str, highlight: Highlight) -> Result<(), RenderError>;

    /// Replace the text of the adopted sheet tagged `owner`, adopting a new
    /// sheet if none carries that tag yet.
    fn replace_stylesheet(&mut self, owner: &str, css: &str) -> Result<(), RenderError>;
}

/// Remove every highlight a previous scan registered.
pub fn clear_highlights(layer: &mut dyn RenderLayer) -> usize {
    let owned: Vec<String> = layer
        .highlight_names()
        .into_iter()
        .filter(|name| name.starts_with(HIGHLIGHT_PREFIX))
        .collect();
    for name in &owned {
        layer.delete_highlight(name);
    }
    owned.len()
}

/// Install one scan's highlights and return the total match count.
///
/// Prior registrations are cleared first. A failure to install the sheet or
/// a layer is logged and does not change the returned count.
pub fn apply_highlights(layer: &mut dyn RenderLayer, entries: &[EntryMatches]) -> usize {
    let cleared = clear_highlights(layer);
    debug!(cleared, "cleared previous highlights");

    let css = generate_css(entries);
    if let Err(e) = layer.replace_stylesheet(STYLESHEET_OWNER, &css) {
        warn!(error = %e, "failed to install highlight stylesheet");
    }

    let mut count = 0;
    for entry in entries.iter().filter(|e| !e.ranges.is_empty()) {
        count += entry.ranges.len();
        let name = highlight_name(entry.index);
        let highlight = Highlight {
            ranges: entry.ranges.ranges().to_vec(),
            priority: i32::try_from(entry.index).unwrap_or(i32::MAX),
        };
        if let Err(e) = layer.set_highlight(&name, highlight) {
            warn!(entry = entry.index, error = %e, "failed to register highlight");
        }
    }
    count
}
