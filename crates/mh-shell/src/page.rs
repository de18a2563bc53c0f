//! Page descriptions: a JSON stand-in for a live tab.
//!
//! ```json
//! {
//!   "url": "https://example.com/",
//!   "viewport": { "client_height": 800, "scroll_top": 0 },
//!   "root": { "tag": "html", "children": [
//!     { "tag": "body", "children": [
//!       "plain text",
//!       { "tag": "x-card", "shadow": ["inside the shadow tree"] },
//!       { "tag": "iframe", "frame": "unreachable" },
//!       { "tag": "iframe", "frame": { "document": { "tag": "html", "children": [] } } },
//!       { "comment": "ignored" }
//!     ]}
//!   ]}
//! }
//! ```

use std::path::Path;

use mh_common::MhError;
use mh_engine::dom::DomError;
use mh_engine::{Document, FrameContent, Namespace, NodeId};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PageDesc {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub viewport: Option<ViewportDesc>,
    pub root: ElementDesc,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ViewportDesc {
    pub client_height: f64,
    #[serde(default)]
    pub scroll_top: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeDesc {
    Text(String),
    Comment { comment: String },
    Element(ElementDesc),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElementDesc {
    pub tag: String,
    /// Namespace URI; absent means HTML.
    #[serde(default)]
    pub ns: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeDesc>,
    #[serde(default)]
    pub shadow: Option<Vec<NodeDesc>>,
    #[serde(default)]
    pub frame: Option<FrameDesc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameDesc {
    Unreachable,
    Document(Box<ElementDesc>),
}

impl PageDesc {
    pub fn load(path: &Path) -> Result<Self, MhError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, MhError> {
        serde_json::from_str(content).map_err(|e| MhError::Page(format!("invalid page: {e}")))
    }

    pub fn document(&self) -> Result<Document, MhError> {
        build_document(&self.root).map_err(|e| MhError::Page(e.to_string()))
    }
}

fn build_document(root: &ElementDesc) -> Result<Document, DomError> {
    let mut doc = Document::new(&root.tag);
    let id = doc.root();
    fill_element(&mut doc, id, root)?;
    Ok(doc)
}

fn fill_element(doc: &mut Document, id: NodeId, desc: &ElementDesc) -> Result<(), DomError> {
    append_children(doc, id, &desc.children)?;
    if let Some(shadow) = &desc.shadow {
        let root = doc.attach_shadow(id)?;
        append_children(doc, root, shadow)?;
    }
    match &desc.frame {
        Some(FrameDesc::Unreachable) => doc.set_frame(id, FrameContent::Unreachable)?,
        Some(FrameDesc::Document(inner)) => {
            let inner = build_document(inner)?;
            doc.set_frame(id, FrameContent::Document(Box::new(inner)))?;
        }
        None => {}
    }
    Ok(())
}

fn append_children(doc: &mut Document, parent: NodeId, children: &[NodeDesc]) -> Result<(), DomError> {
    for child in children {
        match child {
            NodeDesc::Text(text) => {
                doc.append_text(parent, text)?;
            }
            NodeDesc::Comment { comment } => {
                doc.append_comment(parent, comment)?;
            }
            NodeDesc::Element(desc) => {
                let namespace = desc
                    .ns
                    .as_deref()
                    .map_or(Namespace::Html, Namespace::from_uri);
                let id = doc.append_element_ns(parent, &desc.tag, namespace)?;
                fill_element(doc, id, desc)?;
            }
        }
    }
    Ok(())
}
