//! Element node

use std::fmt;

use crate::node::ChildNodes;
use crate::{AttributeNode, Attributes, Node, namespace};

static NO_ATTRIBUTES: Attributes = Attributes::new();

/// Element (e.g. `<div>`)
///
/// Children and attributes are allocated on first write. Until then the
/// read accessors return empty views.
#[derive(Debug, Clone)]
pub struct Element {
    node_name: String,
    original_node_name: String,
    namespace_uri: String,
    attributes: Option<Attributes>,
    children: ChildNodes,
}

impl Element {
    /// Element in the HTML namespace with no attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_namespace(name, namespace::HTML)
    }

    /// Element in the given namespace with no attributes
    pub fn with_namespace(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        let name = name.into();
        Self::with_original_name(name.clone(), name, namespace, None)
    }

    /// Element in the given namespace with attributes
    pub fn with_attributes(
        name: impl Into<String>,
        namespace: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        let name = name.into();
        Self::with_original_name(name.clone(), name, namespace, Some(attributes))
    }

    /// Element whose authored name differs from its normalized name
    pub fn with_original_name(
        name: impl Into<String>,
        original_name: impl Into<String>,
        namespace: impl Into<String>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            node_name: name.into(),
            original_node_name: original_name.into(),
            namespace_uri: namespace.into(),
            attributes,
            children: ChildNodes::default(),
        }
    }

    /// Current name, possibly `prefix:local`
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Name as authored in the source
    pub fn original_node_name(&self) -> &str {
        &self.original_node_name
    }

    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }

    /// Check both name and namespace
    pub fn is(&self, name: &str, namespace: &str) -> bool {
        self.node_name == name && self.namespace_uri == namespace
    }

    /// Children in document order
    pub fn child_nodes(&self) -> &[Node] {
        self.children.as_slice()
    }

    /// Append a child, allocating the child list on first use
    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> &Attributes {
        self.attributes.as_ref().unwrap_or(&NO_ATTRIBUTES)
    }

    /// Attributes for modification, allocated on first access
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        self.attributes.get_or_insert_with(Attributes::new)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes().get_value(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes().contains(name)
    }

    /// Set a value; an existing attribute keeps its namespace and prefix
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let attributes = self.attributes_mut();
        match attributes.get_mut(name) {
            Some(existing) => existing.set_value(value),
            None => {
                attributes.put(AttributeNode::new(name, value));
            }
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.node_name == other.node_name
            && self.original_node_name == other.original_node_name
            && self.namespace_uri == other.namespace_uri
            && self.attributes() == other.attributes()
            && self.child_nodes() == other.child_nodes()
    }
}

impl Eq for Element {}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.node_name)
    }
}
