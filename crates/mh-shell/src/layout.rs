//! Naive block layout for page descriptions: every scannable text node is
//! one line, stacked top to bottom in document order.

use mh_engine::minimap::{Rect, Viewport};
use mh_engine::{Document, MemoryOverlayHost, TextNodes, WalkPolicy};

pub const LINE_HEIGHT: f64 = 20.0;
pub const DEFAULT_CLIENT_HEIGHT: f64 = 800.0;

/// Build an overlay host whose geometry matches the stacked layout of `doc`.
pub fn overlay_host(
    doc: &Document,
    policy: WalkPolicy,
    client_height: f64,
    scroll_top: f64,
) -> MemoryOverlayHost {
    let lines = TextNodes::new(doc, policy).count();
    let document_height = (lines as f64 * LINE_HEIGHT).max(client_height);
    let mut host = MemoryOverlayHost::new(Viewport {
        client_height,
        scroll_top,
        document_height,
    });
    place_text_nodes(&mut host, doc, policy, scroll_top);
    host
}

/// Set each text node's rect relative to a viewport scrolled to `scroll_top`.
pub fn place_text_nodes(
    host: &mut MemoryOverlayHost,
    doc: &Document,
    policy: WalkPolicy,
    scroll_top: f64,
) {
    for (line, node) in TextNodes::new(doc, policy).enumerate() {
        let top = line as f64 * LINE_HEIGHT - scroll_top;
        host.set_node_rect(
            node,
            Rect {
                top,
                bottom: top + LINE_HEIGHT,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mh_engine::minimap::OverlayHost;
    use mh_engine::range::{MatchSpan, TextRange};

    #[test]
    fn stacks_text_nodes() {
        let mut doc = Document::new("html");
        let root = doc.root();
        let first = doc.append_text(root, "one").unwrap();
        let second = doc.append_text(root, "two").unwrap();

        let host = overlay_host(&doc, WalkPolicy::default(), 100.0, 10.0);
        let rect = |node| host.range_rect(&TextRange::new(node, MatchSpan::new(0, 1)));
        assert_eq!(rect(first), Some(Rect { top: -10.0, bottom: 10.0 }));
        assert_eq!(rect(second), Some(Rect { top: 10.0, bottom: 30.0 }));
        assert_eq!(host.viewport().document_height, 100.0);
    }

    #[test]
    fn placement_follows_scroll_offset() {
        let mut doc = Document::new("html");
        let root = doc.root();
        doc.append_text(root, "one").unwrap();
        let second = doc.append_text(root, "two").unwrap();

        let mut host = overlay_host(&doc, WalkPolicy::default(), 100.0, 0.0);
        place_text_nodes(&mut host, &doc, WalkPolicy::default(), 30.0);
        let rect = host.range_rect(&TextRange::new(second, MatchSpan::new(0, 1)));
        assert_eq!(rect, Some(Rect { top: -10.0, bottom: 10.0 }));
    }
}
