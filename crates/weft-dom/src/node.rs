//! DOM Node - tagged node kinds
//!
//! Every node is owned by exactly one parent through its child list. There
//! are no parent back-references; walkers keep their own path stack.

use crate::{Element, NodesVisitor, Traversal, traverse};

/// Node kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Element,
    Text,
    Comment,
    Document,
    DocumentType,
}

/// A node of the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Document(Document),
    DocumentType(DocumentType),
    Element(Element),
    Text(Text),
    Comment(Comment),
}

impl Node {
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Document(_) => NodeType::Document,
            Node::DocumentType(_) => NodeType::DocumentType,
            Node::Element(_) => NodeType::Element,
            Node::Text(_) => NodeType::Text,
            Node::Comment(_) => NodeType::Comment,
        }
    }

    /// DOM `nodeName`
    pub fn node_name(&self) -> &str {
        match self {
            Node::Document(_) => "#document",
            Node::DocumentType(doctype) => doctype.name(),
            Node::Element(element) => element.node_name(),
            Node::Text(_) => "#text",
            Node::Comment(_) => "#comment",
        }
    }

    /// Children in document order; always empty for leaf kinds
    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Document(document) => document.child_nodes(),
            Node::Element(element) => element.child_nodes(),
            Node::DocumentType(_) | Node::Text(_) | Node::Comment(_) => &[],
        }
    }

    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Walk this subtree depth-first
    pub fn traverse<V: NodesVisitor + ?Sized>(&self, visitor: &mut V) -> Traversal {
        traverse(self, visitor)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Node::Comment(comment)
    }
}

impl From<DocumentType> for Node {
    fn from(doctype: DocumentType) -> Self {
        Node::DocumentType(doctype)
    }
}

impl From<Document> for Node {
    fn from(document: Document) -> Self {
        Node::Document(document)
    }
}

/// Child list that is only allocated on first append
#[derive(Debug, Clone, Default)]
pub(crate) struct ChildNodes(Option<Vec<Node>>);

impl ChildNodes {
    pub(crate) fn as_slice(&self) -> &[Node] {
        self.0.as_deref().unwrap_or(&[])
    }

    pub(crate) fn push(&mut self, node: Node) {
        self.0.get_or_insert_with(|| Vec::with_capacity(2)).push(node);
    }
}

impl PartialEq for ChildNodes {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ChildNodes {}

/// Document root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    children: ChildNodes,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child_nodes(&self) -> &[Node] {
        self.children.as_slice()
    }

    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// First element child (usually `<html>`)
    pub fn document_element(&self) -> Option<&Element> {
        self.child_nodes().iter().find_map(Node::as_element)
    }
}

/// DOCTYPE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentType {
    name: String,
    public_id: String,
    system_id: String,
}

impl DocumentType {
    pub fn new(
        name: impl Into<String>,
        public_id: impl Into<String>,
        system_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            public_id: public_id.into(),
            system_id: system_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    pub fn system_id(&self) -> &str {
        &self.system_id
    }
}

/// Text content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    data: String,
}

impl Text {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    data: String,
}

impl Comment {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}
