//! Arena-backed document tree.
//!
//! Models just enough of a page for scanning: elements with a tag and
//! namespace, text nodes, comments, attached shadow roots, and frame
//! elements that may carry their own (possibly unreachable) document.

mod tree;


pub use tree::*;

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Namespace {
    #[default]
    Html,
    Svg,
    MathMl,
    Other(String),
}

impl Namespace {
    pub fn from_uri(uri: &str) -> Self {
        match uri {
            "http://www.w3.org/1999/xhtml" | "" => Namespace::Html,
            "http://www.w3.org/2000/svg" => Namespace::Svg,
            "http://www.w3.org/1998/Math/MathML" => Namespace::MathMl,
            other => Namespace::Other(other.to_string()),
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, Namespace::Html)
    }
}

/// What a frame element gives access to.
#[derive(Debug, Clone)]
pub enum FrameContent {
    Document(Box<Document>),
    /// Content exists but cannot be reached (e.g. cross-origin).
    Unreachable,
}

#[derive(Debug, Clone)]
pub struct ElementData {
    pub tag: String,
    pub namespace: Namespace,
    pub shadow_root: Option<NodeId>,
    pub frame: Option<FrameContent>,
}

impl ElementData {
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Element(ElementData),
    Text(String),
    Comment(String),
    ShadowRoot { host: NodeId },
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("node {0} does not exist")]
    Missing(NodeId),

    #[error("node {0} cannot have children")]
    NotAContainer(NodeId),

    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("element {0} already hosts a shadow root")]
    ShadowAlreadyAttached(NodeId),
}
