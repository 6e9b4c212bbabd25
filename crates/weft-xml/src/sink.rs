//! Destination tree contract
//!
//! What the converter needs from a namespace-aware DOM. [`XmlDocument`]
//! implements it; other DOMs can be plugged in through a custom
//! [`DocumentFactory`].
//!
//! [`XmlDocument`]: crate::XmlDocument
//! [`DocumentFactory`]: crate::DocumentFactory

use crate::XmlAttr;

/// Incrementally built namespace-aware tree
pub trait XmlTreeSink {
    /// Reference to a node of the tree
    type Handle: Copy;

    /// The document node, where conversion starts appending
    fn document(&self) -> Self::Handle;

    /// Create a detached element
    fn create_element_ns(&mut self, namespace: Option<&str>, qualified_name: &str) -> Self::Handle;

    /// Create a detached text node
    fn create_text_node(&mut self, data: &str) -> Self::Handle;

    /// Create a detached comment
    fn create_comment(&mut self, data: &str) -> Self::Handle;

    /// Attach an attribute to an element
    fn set_attribute_node_ns(&mut self, element: Self::Handle, attr: XmlAttr);

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle);

    /// Parent of a node, `None` for the document node
    fn parent_node(&self, node: Self::Handle) -> Option<Self::Handle>;

    /// Nodes created so far, including the document node
    fn node_count(&self) -> usize;
}
