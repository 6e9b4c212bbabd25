//! weft HTML Parser
//!
//! HTML5 front end built on html5ever. Produces a [`weft_dom`] tree whose
//! elements and attributes already carry their namespaces.

mod parser;

pub use parser::HtmlParser;

use weft_dom::Node;

/// Parse an HTML string into a document node
pub fn parse(html: &str) -> Result<Node, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
