//! Scroll minimap: a fixed bar on the right edge of the viewport with one
//! colored tick per match, placed by the match's position in the document.
//!
//! Only the top-level context draws a minimap. The bar is a pure function
//! of the stored marks and the current viewport, so redrawing after a
//! resize, or redrawing the same marks twice, yields the same frame.

mod frame;
mod memory;

use mh_common::RenderError;
use tracing::debug;

use crate::range::{EntryMatches, TextRange};

pub use frame::{compose_frame, DrawOp, MinimapFrame};
pub use memory::{MemoryOverlayHost, MountedOverlay};

/// Element id of the overlay.
pub const OVERLAY_ID: &str = "mh-scroll-marks";

/// Vertical extent of a rendered range, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub client_height: f64,
    pub scroll_top: f64,
    /// Full scrollable height of the document.
    pub document_height: f64,
}

/// How the overlay element is placed on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayStyle {
    pub width_px: u32,
    pub outline: &'static str,
    pub z_index: i32,
}

impl OverlayStyle {
    pub fn new(width_px: u32) -> Self {
        Self {
            width_px,
            outline: "1px solid whitesmoke",
            z_index: 9999,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapSettings {
    pub width: u32,
    /// No ticks are drawn in viewports shorter than this.
    pub min_height: u32,
}

impl Default for MinimapSettings {
    fn default() -> Self {
        Self {
            width: 15,
            min_height: 100,
        }
    }
}

impl From<&mh_config::schema::MinimapConfig> for MinimapSettings {
    fn from(config: &mh_config::schema::MinimapConfig) -> Self {
        Self {
            width: config.width,
            min_height: config.min_height,
        }
    }
}

/// Page geometry and the overlay element, as seen by the minimap.
pub trait OverlayHost {
    fn viewport(&self) -> Viewport;

    /// Bounding box of a range; `None` if it is not rendered.
    fn range_rect(&self, range: &TextRange) -> Option<Rect>;

    fn has_overlay(&self, id: &str) -> bool;

    fn mount_overlay(&mut self, id: &str, style: &OverlayStyle) -> Result<(), RenderError>;

    /// Returns `true` if an overlay was removed.
    fn remove_overlay(&mut self, id: &str) -> bool;

    fn paint_overlay(&mut self, id: &str, frame: &MinimapFrame) -> Result<(), RenderError>;
}

/// Ranges of one entry, kept for redraws.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkSource {
    pub color: String,
    pub ranges: Vec<TextRange>,
}

#[derive(Debug, Default)]
pub struct Minimap {
    settings: MinimapSettings,
    marks: Option<Vec<MarkSource>>,
}

impl Minimap {
    pub fn new(settings: MinimapSettings) -> Self {
        Self {
            settings,
            marks: None,
        }
    }

    /// Whether a resize should trigger a redraw.
    pub fn is_active(&self) -> bool {
        self.marks.is_some()
    }

    /// Show marks for the given scan, or remove the bar when `None`.
    pub fn update(
        &mut self,
        host: &mut dyn OverlayHost,
        entries: Option<&[EntryMatches]>,
    ) -> Result<(), RenderError> {
        let Some(entries) = entries else {
            self.marks = None;
            if host.remove_overlay(OVERLAY_ID) {
                debug!("minimap removed");
            }
            return Ok(());
        };

        self.marks = Some(
            entries
                .iter()
                .map(|e| MarkSource {
                    color: e.color.clone(),
                    ranges: e.ranges.ranges().to_vec(),
                })
                .collect(),
        );
        if !host.has_overlay(OVERLAY_ID) {
            host.mount_overlay(OVERLAY_ID, &OverlayStyle::new(self.settings.width))?;
        }
        self.redraw(host)
    }

    /// Recompute tick positions for the current viewport and repaint.
    pub fn handle_resize(&mut self, host: &mut dyn OverlayHost) -> Result<(), RenderError> {
        if self.marks.is_none() {
            return Ok(());
        }
        self.redraw(host)
    }

    fn redraw(&self, host: &mut dyn OverlayHost) -> Result<(), RenderError> {
        let Some(marks) = &self.marks else {
            return Ok(());
        };
        let viewport = host.viewport();
        // Short viewports repaint with an empty bar.
        let frame = if viewport.client_height < f64::from(self.settings.min_height) {
            debug!(height = viewport.client_height, "viewport too short for minimap ticks");
            compose_frame(self.settings, viewport, &[], |_| None)
        } else {
            compose_frame(self.settings, viewport, marks, |r| host.range_rect(r))
        };
        host.paint_overlay(OVERLAY_ID, &frame)
    }
}
