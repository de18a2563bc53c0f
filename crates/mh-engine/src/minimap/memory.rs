//! In-process overlay host with fixed geometry.

use std::collections::{BTreeMap, HashMap};

use mh_common::RenderError;

use super::{MinimapFrame, OverlayHost, OverlayStyle, Rect, Viewport};
use crate::dom::NodeId;
use crate::range::TextRange;

#[derive(Debug, Clone)]
pub struct MountedOverlay {
    pub style: OverlayStyle,
    pub frame: Option<MinimapFrame>,
    pub paints: usize,
}

/// Geometry is given per text node: every range in a node gets the node's
/// box.
#[derive(Debug)]
pub struct MemoryOverlayHost {
    viewport: Viewport,
    node_rects: HashMap<NodeId, Rect>,
    overlays: BTreeMap<String, MountedOverlay>,
}

impl MemoryOverlayHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            node_rects: HashMap::new(),
            overlays: BTreeMap::new(),
        }
    }

    pub fn set_node_rect(&mut self, node: NodeId, rect: Rect) {
        self.node_rects.insert(node, rect);
    }

    /// Simulate a window resize or scroll.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn overlay(&self, id: &str) -> Option<&MountedOverlay> {
        self.overlays.get(id)
    }
}

impl OverlayHost for MemoryOverlayHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn range_rect(&self, range: &TextRange) -> Option<Rect> {
        self.node_rects.get(&range.node).copied()
    }

    fn has_overlay(&self, id: &str) -> bool {
        self.overlays.contains_key(id)
    }

    fn mount_overlay(&mut self, id: &str, style: &OverlayStyle) -> Result<(), RenderError> {
        self.overlays.insert(
            id.to_string(),
            MountedOverlay {
                style: style.clone(),
                frame: None,
                paints: 0,
            },
        );
        Ok(())
    }

    fn remove_overlay(&mut self, id: &str) -> bool {
        self.overlays.remove(id).is_some()
    }

    fn paint_overlay(&mut self, id: &str, frame: &MinimapFrame) -> Result<(), RenderError> {
        let overlay = self
            .overlays
            .get_mut(id)
            .ok_or_else(|| RenderError::Overlay(format!("no overlay '{id}' mounted")))?;
        overlay.frame = Some(frame.clone());
        overlay.paints += 1;
        Ok(())
    }
}
