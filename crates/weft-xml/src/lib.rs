//! weft XML - Namespace-resolving DOM conversion
//!
//! Rebuilds a [`weft_dom`] tree as a namespace-aware XML document,
//! re-deriving element and attribute namespaces from `xmlns` declarations.

mod convert;
mod document;
mod factory;
pub mod scope;
mod sink;

pub use convert::{ConvertError, NamespaceResolvingVisitor, convert, to_xml_document};
pub use document::{NodeId, XmlAttr, XmlDocument, XmlElement, XmlNode, XmlNodeData};
pub use factory::{DocumentFactory, FactoryError, FactoryFeatures, Feature, XmlDocumentFactory};
pub use scope::NamespaceScope;
pub use sink::XmlTreeSink;
