//! Conversion from a weft tree into a namespace-aware XML document
//!
//! Prefixes are re-resolved against the `xmlns` declarations in scope. An
//! unbound prefix is never an error: the node keeps the namespace the
//! parser gave it.

use weft_dom::{Element, Node, NodesVisitor};

use crate::scope::{NamespaceScope, declared_prefix, split_qualified_name};
use crate::{
    DocumentFactory, FactoryError, Feature, XmlAttr, XmlDocument, XmlDocumentFactory, XmlTreeSink,
};

/// Conversion errors
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("document factory rejected secure processing: {0}")]
    InsecureFactory(#[source] FactoryError),

    #[error("document factory could not create a document: {0}")]
    FactoryInit(#[source] FactoryError),
}

/// Switches applied to every factory before a document is requested.
/// `true` in the last column means a rejection aborts the conversion.
const HARDENING: [(Feature, bool, bool); 7] = [
    (Feature::NamespaceAware, true, true),
    (Feature::DisallowDoctypeDecl, true, false),
    (Feature::ExternalGeneralEntities, false, false),
    (Feature::ExternalParameterEntities, false, false),
    (Feature::LoadExternalDtd, false, false),
    (Feature::XIncludeAware, false, true),
    (Feature::ExpandEntityReferences, false, true),
];

/// Convert `root` into a new [`XmlDocument`]
pub fn convert(root: &Node) -> Result<XmlDocument, ConvertError> {
    to_xml_document(root, XmlDocumentFactory::new())
}

/// Convert `root` into a document produced by `factory`
///
/// The factory is hardened first. Nothing is returned unless the whole tree
/// was converted.
pub fn to_xml_document<F: DocumentFactory>(
    root: &Node,
    mut factory: F,
) -> Result<F::Document, ConvertError> {
    harden(&mut factory)?;
    let document = factory.new_document().map_err(ConvertError::FactoryInit)?;

    tracing::debug!(root = root.node_name(), "converting to XML document");
    let mut visitor = NamespaceResolvingVisitor::new(document);
    root.traverse(&mut visitor);
    tracing::debug!(
        nodes = visitor.document().node_count(),
        elements = visitor.elements_created(),
        "conversion finished"
    );

    Ok(visitor.into_document())
}

fn harden<F: DocumentFactory>(factory: &mut F) -> Result<(), ConvertError> {
    for (feature, enabled, required) in HARDENING {
        match factory.set_feature(feature, enabled) {
            Ok(()) => {}
            Err(err) if required => return Err(ConvertError::InsecureFactory(err)),
            Err(err) => tracing::warn!(%feature, error = %err, "hardening feature not applied"),
        }
    }
    Ok(())
}

/// Visitor that rebuilds the walked tree inside an [`XmlTreeSink`]
///
/// Holds the insertion cursor and one [`NamespaceScope`] per open element,
/// above an empty root scope. Not reentrant: use one visitor per walk.
pub struct NamespaceResolvingVisitor<D: XmlTreeSink> {
    document: D,
    current: D::Handle,
    scopes: Vec<NamespaceScope>,
    elements_created: usize,
}

impl<D: XmlTreeSink> NamespaceResolvingVisitor<D> {
    pub fn new(document: D) -> Self {
        let current = document.document();
        Self {
            document,
            current,
            scopes: vec![NamespaceScope::new()],
            elements_created: 0,
        }
    }

    /// Document being built
    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }

    /// Bindings in effect at the cursor
    pub fn scope(&self) -> &NamespaceScope {
        // The root scope is only popped by an unbalanced exit
        self.scopes.last().unwrap_or(&EMPTY_SCOPE)
    }

    pub fn elements_created(&self) -> usize {
        self.elements_created
    }

    fn open_element(&mut self, element: &Element) {
        let mut scope = self.scope().clone();
        for attr in element.attributes() {
            if let Some(prefix) = declared_prefix(attr.name()) {
                scope.declare(prefix, attr.value());
            }
        }
        self.scopes.push(scope);

        let created = self.build_element(element);
        self.document.append_child(self.current, created);
        self.current = created;
        self.elements_created += 1;
    }

    fn build_element(&mut self, element: &Element) -> D::Handle {
        let scope = self.scopes.last().unwrap_or(&EMPTY_SCOPE);

        let (prefix, local_name) = split_qualified_name(element.node_name());
        let namespace = scope.resolve(prefix, Some(element.namespace_uri()));
        let created = self.document.create_element_ns(namespace, local_name);

        for attr in element.attributes() {
            if declared_prefix(attr.name()).is_some() {
                continue;
            }
            let (prefix, local_name) = split_qualified_name(attr.name());
            let namespace = scope.resolve(prefix, attr.namespace());

            let mut copied = XmlAttr::new_ns(namespace, local_name);
            copied.set_value(attr.value());
            copied.set_prefix(attr.prefix());
            self.document.set_attribute_node_ns(created, copied);
        }
        created
    }

    fn close_element(&mut self) {
        self.scopes.pop();
        if let Some(parent) = self.document.parent_node(self.current) {
            self.current = parent;
        }
    }
}

static EMPTY_SCOPE: NamespaceScope = NamespaceScope::new();

impl<D: XmlTreeSink> NodesVisitor for NamespaceResolvingVisitor<D> {
    fn enter(&mut self, node: &Node) {
        match node {
            Node::Element(element) => self.open_element(element),
            Node::Text(text) => {
                let created = self.document.create_text_node(text.data());
                self.document.append_child(self.current, created);
            }
            Node::Comment(comment) => {
                let created = self.document.create_comment(comment.data());
                self.document.append_child(self.current, created);
            }
            Node::Document(_) | Node::DocumentType(_) => {}
        }
    }

    fn exit(&mut self, node: &Node) {
        match node {
            Node::Element(_) => self.close_element(),
            Node::Text(_) | Node::Comment(_) | Node::Document(_) | Node::DocumentType(_) => {}
        }
    }
}
