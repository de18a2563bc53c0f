//! Scroll minimap geometry.

use serde::{Deserialize, Serialize};

/// Whether the minimap is drawn at all lives in the entry store
/// (`scrollMarks`); this section only shapes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    /// Bar width in pixels (valid range: 4-64).
    pub width: u32,
    /// Viewports shorter than this get no bar (valid range: 10-1000).
    pub min_height: u32,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            width: 15,
            min_height: 100,
        }
    }
}
