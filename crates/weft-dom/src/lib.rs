//! weft DOM - Source document tree
//!
//! Lightweight, namespace-aware tree produced by an HTML parser and
//! consumed by depth-first visitors.

mod attributes;
mod element;
pub mod namespace;
mod node;
mod traverse;

pub use attributes::{AttributeNode, Attributes};
pub use element::Element;
pub use node::{Comment, Document, DocumentType, Node, NodeType, Text};
pub use traverse::{NodesVisitor, Traversal, traverse};
