//! Namespace-aware XML document (arena-based allocation)
//!
//! Nodes are addressed by [`NodeId`]. Each node stores its parent id, which
//! is only an index into the arena and never an owning reference.

use crate::XmlTreeSink;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document node
    pub const DOCUMENT: NodeId = NodeId(0);
}

/// Attribute with a resolved namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttr {
    namespace: Option<String>,
    prefix: Option<String>,
    local_name: String,
    value: String,
}

impl XmlAttr {
    /// Attribute in `namespace`; an empty namespace means none
    pub fn new_ns(namespace: Option<&str>, local_name: &str) -> Self {
        Self {
            namespace: normalize_namespace(namespace),
            prefix: None,
            local_name: local_name.to_string(),
            value: String::new(),
        }
    }

    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Set the literal prefix used when serializing
    pub fn set_prefix(&mut self, prefix: Option<&str>) {
        self.prefix = prefix.filter(|p| !p.is_empty()).map(str::to_string);
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// `prefix:local`, or just `local`
    pub fn name(&self) -> String {
        qualify(self.prefix.as_deref(), &self.local_name)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

/// Element with a resolved namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    namespace: Option<String>,
    prefix: Option<String>,
    local_name: String,
    attributes: Vec<XmlAttr>,
}

impl XmlElement {
    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// `prefix:local`, or just `local`
    pub fn tag_name(&self) -> String {
        qualify(self.prefix.as_deref(), &self.local_name)
    }

    /// Attributes in the order they were set
    pub fn attributes(&self) -> &[XmlAttr] {
        &self.attributes
    }

    /// Attribute by namespace and local name
    pub fn attribute_ns(&self, namespace: Option<&str>, local_name: &str) -> Option<&XmlAttr> {
        let namespace = namespace.filter(|ns| !ns.is_empty());
        self.attributes
            .iter()
            .find(|attr| attr.namespace.as_deref() == namespace && attr.local_name == local_name)
    }

    /// Attribute value by qualified name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name() == name)
            .map(XmlAttr::value)
    }

    fn set_attribute_node_ns(&mut self, attr: XmlAttr) -> Option<XmlAttr> {
        let existing = self.attributes.iter_mut().find(|existing| {
            existing.namespace == attr.namespace && existing.local_name == attr.local_name
        });
        match existing {
            Some(existing) => Some(std::mem::replace(existing, attr)),
            None => {
                self.attributes.push(attr);
                None
            }
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNodeData {
    Document,
    Element(XmlElement),
    Text(String),
    Comment(String),
}

/// Arena node
#[derive(Debug, Clone)]
pub struct XmlNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    pub data: XmlNodeData,
}

impl XmlNode {
    fn new(data: XmlNodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn as_element(&self) -> Option<&XmlElement> {
        match &self.data {
            XmlNodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            XmlNodeData::Text(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_comment(&self) -> Option<&str> {
        match &self.data {
            XmlNodeData::Comment(comment) => Some(comment),
            _ => None,
        }
    }
}

/// XML document
#[derive(Debug, Clone)]
pub struct XmlDocument {
    nodes: Vec<XmlNode>,
}

impl XmlDocument {
    /// Create a document holding only the document node
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![XmlNode::new(XmlNodeData::Document)],
        }
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&XmlNode> {
        self.nodes.get(id.0 as usize)
    }

    /// Get element data if `id` is an element
    pub fn element(&self, id: NodeId) -> Option<&XmlElement> {
        self.get(id).and_then(XmlNode::as_element)
    }

    /// Number of nodes, including the document node
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node exists from creation
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First element child of the document node
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::DOCUMENT)
            .find(|(_, node)| node.as_element().is_some())
            .map(|(id, _)| id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(XmlNode::parent)
    }

    /// Iterate over the children of a node
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &XmlNode)> {
        self.get(id)
            .map(XmlNode::children)
            .unwrap_or(&[])
            .iter()
            .filter_map(|&child| self.get(child).map(|node| (child, node)))
    }

    /// All nodes below `id` in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .get(id)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(node) = self.get(next) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Descendant elements matching namespace and local name
    pub fn elements_by_tag_name_ns(&self, namespace: Option<&str>, local_name: &str) -> Vec<NodeId> {
        self.descendants(NodeId::DOCUMENT)
            .into_iter()
            .filter(|&id| {
                self.element(id).is_some_and(|element| {
                    element.namespace_uri() == namespace && element.local_name() == local_name
                })
            })
            .collect()
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(XmlNode::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|child| self.get(child).and_then(XmlNode::as_text))
            .collect()
    }

    /// Create a detached element; `qualified_name` may carry a prefix
    pub fn create_element_ns(&mut self, namespace: Option<&str>, qualified_name: &str) -> NodeId {
        let (prefix, local_name) = match qualified_name.split_once(':') {
            Some((prefix, local)) => (Some(prefix.to_string()), local),
            None => (None, qualified_name),
        };
        self.push(XmlNodeData::Element(XmlElement {
            namespace: normalize_namespace(namespace),
            prefix,
            local_name: local_name.to_string(),
            attributes: Vec::new(),
        }))
    }

    /// Create a detached text node
    pub fn create_text_node(&mut self, data: &str) -> NodeId {
        self.push(XmlNodeData::Text(data.to_string()))
    }

    /// Create a detached comment
    pub fn create_comment(&mut self, data: &str) -> NodeId {
        self.push(XmlNodeData::Comment(data.to_string()))
    }

    /// Append `child` as the last child of `parent`
    ///
    /// A child that already has a parent is moved. Appending the document
    /// node, appending to a leaf, or appending a node under itself or one of
    /// its descendants is ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let accepts_children = matches!(
            self.get(parent).map(|node| &node.data),
            Some(XmlNodeData::Document | XmlNodeData::Element(_))
        );
        if !accepts_children
            || child == NodeId::DOCUMENT
            || self.get(child).is_none()
            || self.is_inclusive_ancestor(child, parent)
        {
            return;
        }

        if let Some(old_parent) = self.parent(child) {
            if let Some(node) = self.get_mut(old_parent) {
                node.children.retain(|&id| id != child);
            }
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Set an attribute on an element, replacing one with the same
    /// namespace and local name in place
    pub fn set_attribute_node_ns(&mut self, element: NodeId, attr: XmlAttr) -> Option<XmlAttr> {
        match self.get_mut(element).map(|node| &mut node.data) {
            Some(XmlNodeData::Element(element)) => element.set_attribute_node_ns(attr),
            _ => None,
        }
    }

    /// Whether `ancestor` is `node` or lies on its parent chain
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.parent(id);
        }
        false
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut XmlNode> {
        self.nodes.get_mut(id.0 as usize)
    }

    fn push(&mut self, data: XmlNodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(XmlNode::new(data));
        id
    }
}

impl XmlTreeSink for XmlDocument {
    type Handle = NodeId;

    fn document(&self) -> NodeId {
        NodeId::DOCUMENT
    }

    fn create_element_ns(&mut self, namespace: Option<&str>, qualified_name: &str) -> NodeId {
        XmlDocument::create_element_ns(self, namespace, qualified_name)
    }

    fn create_text_node(&mut self, data: &str) -> NodeId {
        XmlDocument::create_text_node(self, data)
    }

    fn create_comment(&mut self, data: &str) -> NodeId {
        XmlDocument::create_comment(self, data)
    }

    fn set_attribute_node_ns(&mut self, element: NodeId, attr: XmlAttr) {
        XmlDocument::set_attribute_node_ns(self, element, attr);
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        XmlDocument::append_child(self, parent, child);
    }

    fn parent_node(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node)
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}

fn normalize_namespace(namespace: Option<&str>) -> Option<String> {
    namespace.filter(|ns| !ns.is_empty()).map(str::to_string)
}

fn qualify(prefix: Option<&str>, local_name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}:{local_name}"),
        None => local_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = "http://www.w3.org/2000/svg";

    #[test]
    fn test_append_and_navigate() {
        let mut doc = XmlDocument::new();
        let root = doc.create_element_ns(Some(SVG), "svg");
        let text = doc.create_text_node("hi");
        doc.append_child(NodeId::DOCUMENT, root);
        doc.append_child(root, text);

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.document_element(), Some(root));
        assert_eq!(doc.parent(text), Some(root));
        assert_eq!(doc.parent(root), Some(NodeId::DOCUMENT));
        assert_eq!(doc.parent(NodeId::DOCUMENT), None);
        assert_eq!(doc.text_content(root), "hi");
    }

    #[test]
    fn test_append_moves_child() {
        let mut doc = XmlDocument::new();
        let a = doc.create_element_ns(None, "a");
        let b = doc.create_element_ns(None, "b");
        let c = doc.create_comment("c");
        doc.append_child(NodeId::DOCUMENT, a);
        doc.append_child(a, b);
        doc.append_child(a, c);
        doc.append_child(b, c);

        assert_eq!(doc.children(a).count(), 1);
        assert_eq!(doc.parent(c), Some(b));
    }

    #[test]
    fn test_append_ancestor_is_ignored() {
        let mut doc = XmlDocument::new();
        let a = doc.create_element_ns(None, "a");
        let b = doc.create_element_ns(None, "b");
        doc.append_child(NodeId::DOCUMENT, a);
        doc.append_child(a, b);

        doc.append_child(b, a);
        doc.append_child(a, a);

        assert_eq!(doc.parent(a), Some(NodeId::DOCUMENT));
        assert_eq!(doc.parent(b), Some(a));
        assert_eq!(doc.get(a).unwrap().children(), &[b]);
        assert!(doc.get(b).unwrap().children().is_empty());
        assert_eq!(doc.descendants(NodeId::DOCUMENT), vec![a, b]);
    }

    #[test]
    fn test_leaf_rejects_children() {
        let mut doc = XmlDocument::new();
        let text = doc.create_text_node("x");
        let el = doc.create_element_ns(None, "a");
        doc.append_child(text, el);

        assert_eq!(doc.parent(el), None);
        assert_eq!(doc.children(text).count(), 0);
    }

    #[test]
    fn test_qualified_element_name() {
        let mut doc = XmlDocument::new();
        let id = doc.create_element_ns(Some(SVG), "svg:rect");
        let element = doc.element(id).unwrap();

        assert_eq!(element.prefix(), Some("svg"));
        assert_eq!(element.local_name(), "rect");
        assert_eq!(element.tag_name(), "svg:rect");
    }

    #[test]
    fn test_empty_namespace_is_none() {
        let mut doc = XmlDocument::new();
        let id = doc.create_element_ns(Some(""), "a");
        assert_eq!(doc.element(id).unwrap().namespace_uri(), None);
        assert_eq!(XmlAttr::new_ns(Some(""), "b").namespace_uri(), None);
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut doc = XmlDocument::new();
        let id = doc.create_element_ns(None, "a");

        for (name, value) in [("x", "1"), ("y", "2"), ("x", "3")] {
            let mut attr = XmlAttr::new_ns(None, name);
            attr.set_value(value);
            doc.set_attribute_node_ns(id, attr);
        }

        let element = doc.element(id).unwrap();
        let names: Vec<_> = element.attributes().iter().map(XmlAttr::local_name).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(element.get_attribute("x"), Some("3"));
    }

    #[test]
    fn test_same_local_name_different_namespace() {
        let mut doc = XmlDocument::new();
        let id = doc.create_element_ns(None, "a");
        let mut plain = XmlAttr::new_ns(None, "href");
        plain.set_value("1");
        let mut linked = XmlAttr::new_ns(Some("http://www.w3.org/1999/xlink"), "href");
        linked.set_prefix(Some("xlink"));
        linked.set_value("2");
        doc.set_attribute_node_ns(id, plain);
        doc.set_attribute_node_ns(id, linked);

        let element = doc.element(id).unwrap();
        assert_eq!(element.attributes().len(), 2);
        assert_eq!(element.get_attribute("xlink:href"), Some("2"));
        assert_eq!(element.attribute_ns(None, "href").map(XmlAttr::value), Some("1"));
    }
}
