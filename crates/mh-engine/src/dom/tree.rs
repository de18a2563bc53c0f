//! Document construction and queries.

use super::{DomError, ElementData, FrameContent, Namespace, Node, NodeId, NodeKind};

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// A document whose root element is `root_tag` (usually `html`).
    pub fn new(root_tag: &str) -> Self {
        let root = Node {
            kind: NodeKind::Element(ElementData {
                tag: root_tag.to_string(),
                namespace: Namespace::Html,
                shadow_root: None,
                frame: None,
            }),
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// The document element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.node(id)?.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Character data of a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Text(data) => Some(data),
            _ => None,
        }
    }

    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.element(host)?.shadow_root
    }

    /// Host element of a shadow root.
    pub fn shadow_host(&self, shadow_root: NodeId) -> Option<NodeId> {
        match self.node(shadow_root)?.kind {
            NodeKind::ShadowRoot { host } => Some(host),
            _ => None,
        }
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId, DomError> {
        let container = self.node(parent).ok_or(DomError::Missing(parent))?;
        if !matches!(
            container.kind,
            NodeKind::Element(_) | NodeKind::ShadowRoot { .. }
        ) {
            return Err(DomError::NotAContainer(parent));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, DomError> {
        self.append_element_ns(parent, tag, Namespace::Html)
    }

    pub fn append_element_ns(
        &mut self,
        parent: NodeId,
        tag: &str,
        namespace: Namespace,
    ) -> Result<NodeId, DomError> {
        self.push(
            parent,
            NodeKind::Element(ElementData {
                tag: tag.to_string(),
                namespace,
                shadow_root: None,
                frame: None,
            }),
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, DomError> {
        self.push(parent, NodeKind::Text(text.to_string()))
    }

    pub fn append_comment(&mut self, parent: NodeId, text: &str) -> Result<NodeId, DomError> {
        self.push(parent, NodeKind::Comment(text.to_string()))
    }

    /// Attach an empty shadow root to `host` and return it.
    ///
    /// The shadow root is not a child of its host; it is reached through
    /// [`Document::shadow_root`].
    pub fn attach_shadow(&mut self, host: NodeId) -> Result<NodeId, DomError> {
        match self.element(host) {
            None if self.node(host).is_none() => return Err(DomError::Missing(host)),
            None => return Err(DomError::NotAnElement(host)),
            Some(data) if data.shadow_root.is_some() => {
                return Err(DomError::ShadowAlreadyAttached(host))
            }
            Some(_) => {}
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::ShadowRoot { host },
            parent: None,
            children: Vec::new(),
        });
        if let NodeKind::Element(data) = &mut self.nodes[host.0].kind {
            data.shadow_root = Some(id);
        }
        Ok(id)
    }

    /// Give a frame element its content.
    pub fn set_frame(&mut self, element: NodeId, content: FrameContent) -> Result<(), DomError> {
        match self.nodes.get_mut(element.0).map(|n| &mut n.kind) {
            Some(NodeKind::Element(data)) => {
                data.frame = Some(content);
                Ok(())
            }
            Some(_) => Err(DomError::NotAnElement(element)),
            None => Err(DomError::Missing(element)),
        }
    }

    /// Frame elements with content, in document order, including those
    /// inside shadow trees. Nested frames' own frames are not included.
    pub fn frames(&self) -> Vec<(NodeId, &FrameContent)> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let Some(data) = self.element(id) {
                if let Some(frame) = &data.frame {
                    out.push((id, frame));
                }
            }
            stack.extend(self.children(id).iter().rev());
            // Shadow content renders in place of the light children.
            if let Some(shadow) = self.shadow_root(id) {
                stack.extend(self.children(shadow).iter().rev());
            }
        }
        out
    }

    /// Concatenated text of `id` and its light-tree descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(text) = self.text(id) {
                out.push_str(text);
            }
            stack.extend(self.children(id).iter().rev());
        }
        out
    }
}
