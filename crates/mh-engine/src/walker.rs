//! Document traversal for scanning.
//!
//! [`Walker`] walks one tree (a document element or a shadow root) in
//! pre-order and yields the nodes a scan cares about. [`TextNodes`] stacks
//! walkers to descend into shadow trees at the point their host appears,
//! which keeps rendered order.

use crate::dom::{Document, NodeId, NodeKind};

/// Elements whose whole subtree is never scanned. Frames are opaque here;
/// their documents are scanned separately.
pub const SKIPPED_ELEMENTS: &[&str] = &[
    "style", "script", "noscript", "object", "frame", "iframe", "option", "optgroup",
];

#[derive(Debug, Clone, Copy)]
pub struct WalkPolicy {
    /// Reject SVG, MathML and other non-HTML subtrees.
    pub skip_foreign_namespaces: bool,
}

impl Default for WalkPolicy {
    fn default() -> Self {
        Self {
            skip_foreign_namespaces: true,
        }
    }
}

/// A node the scan should act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Text(NodeId),
    /// An element hosting a shadow tree, to be walked separately.
    ShadowHost { host: NodeId, shadow_root: NodeId },
}

enum Filter {
    Accept,
    Skip,
    Reject,
}

/// Single-pass pre-order walk over one tree. The root itself is not visited.
pub struct Walker<'a> {
    doc: &'a Document,
    policy: WalkPolicy,
    stack: Vec<NodeId>,
}

impl<'a> Walker<'a> {
    pub fn new(doc: &'a Document, root: NodeId, policy: WalkPolicy) -> Self {
        Self {
            doc,
            policy,
            stack: doc.children(root).iter().rev().copied().collect(),
        }
    }

    fn classify(&self, id: NodeId) -> Filter {
        // Light children of a shadow host are replaced by its shadow tree.
        if let Some(parent) = self.doc.parent(id) {
            if self.doc.shadow_root(parent).is_some() {
                return Filter::Reject;
            }
        }
        let Some(node) = self.doc.node(id) else {
            return Filter::Reject;
        };
        match &node.kind {
            NodeKind::Text(_) => Filter::Accept,
            NodeKind::Comment(_) | NodeKind::ShadowRoot { .. } => Filter::Skip,
            NodeKind::Element(data) => {
                if SKIPPED_ELEMENTS.iter().any(|tag| data.is(tag)) {
                    Filter::Reject
                } else if self.policy.skip_foreign_namespaces && !data.namespace.is_html() {
                    Filter::Reject
                } else {
                    Filter::Accept
                }
            }
        }
    }
}

impl Iterator for Walker<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        while let Some(id) = self.stack.pop() {
            match self.classify(id) {
                Filter::Reject | Filter::Skip => continue,
                Filter::Accept => {}
            }
            self.stack.extend(self.doc.children(id).iter().rev());

            if self.doc.text(id).is_some() {
                return Some(Visit::Text(id));
            }
            if let Some(shadow_root) = self.doc.shadow_root(id) {
                return Some(Visit::ShadowHost {
                    host: id,
                    shadow_root,
                });
            }
        }
        None
    }
}

/// Every scannable text node of a document, shadow trees included, in
/// rendered order. Each node is yielded at most once.
pub struct TextNodes<'a> {
    doc: &'a Document,
    policy: WalkPolicy,
    walkers: Vec<Walker<'a>>,
}

impl<'a> TextNodes<'a> {
    pub fn new(doc: &'a Document, policy: WalkPolicy) -> Self {
        Self::from_root(doc, doc.root(), policy)
    }

    pub fn from_root(doc: &'a Document, root: NodeId, policy: WalkPolicy) -> Self {
        Self {
            doc,
            policy,
            walkers: vec![Walker::new(doc, root, policy)],
        }
    }
}

impl Iterator for TextNodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let walker = self.walkers.last_mut()?;
            match walker.next() {
                Some(Visit::Text(id)) => return Some(id),
                Some(Visit::ShadowHost { shadow_root, .. }) => {
                    let nested = Walker::new(self.doc, shadow_root, self.policy);
                    self.walkers.push(nested);
                }
                None => {
                    self.walkers.pop();
                }
            }
        }
    }
}
