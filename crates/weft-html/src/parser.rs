//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to a weft tree.

use std::io::Read;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use weft_dom::{AttributeNode, Attributes, Comment, Document, DocumentType, Element, Node, Text};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Clone, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML string into a document node
    pub fn parse(&self, html: &str) -> Result<Node, ParseError> {
        self.parse_reader(&mut html.as_bytes())
    }

    /// Parse UTF-8 HTML from a reader
    pub fn parse_reader<R: Read>(&self, reader: &mut R) -> Result<Node, ParseError> {
        tracing::debug!("parsing HTML document");

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(reader)?;

        let mut document = Document::new();
        for child in dom.document.children.borrow().iter() {
            if let Some(node) = self.convert_node(child) {
                document.append_child(node);
            }
        }

        tracing::debug!(children = document.child_nodes().len(), "parsed HTML document");
        Ok(Node::Document(document))
    }

    /// Convert an RcDom node; `None` for kinds weft does not model
    fn convert_node(&self, handle: &Handle) -> Option<Node> {
        match &handle.data {
            RcNodeData::Document | RcNodeData::ProcessingInstruction { .. } => None,
            RcNodeData::Doctype {
                name,
                public_id,
                system_id,
            } => Some(
                DocumentType::new(name.to_string(), public_id.to_string(), system_id.to_string())
                    .into(),
            ),
            RcNodeData::Text { contents } => Some(Text::new(contents.borrow().to_string()).into()),
            RcNodeData::Comment { contents } => Some(Comment::new(contents.to_string()).into()),
            RcNodeData::Element {
                name,
                attrs,
                template_contents,
                ..
            } => {
                let attributes: Attributes = attrs
                    .borrow()
                    .iter()
                    .map(|attr| {
                        let prefix = attr.name.prefix.as_ref().map(|p| p.to_string());
                        let namespace = (!attr.name.ns.is_empty()).then(|| attr.name.ns.to_string());
                        AttributeNode::with_namespace(
                            qualified(prefix.as_deref(), &attr.name.local),
                            attr.value.to_string(),
                            namespace,
                            prefix,
                        )
                    })
                    .collect();

                let node_name = qualified(name.prefix.as_deref(), &name.local);
                let mut element = Element::with_original_name(
                    node_name.clone(),
                    node_name,
                    name.ns.to_string(),
                    (!attributes.is_empty()).then_some(attributes),
                );

                for child in handle.children.borrow().iter() {
                    if let Some(node) = self.convert_node(child) {
                        element.append_child(node);
                    }
                }
                // Template contents live in a separate fragment
                if let Some(contents) = template_contents.borrow().as_ref() {
                    for child in contents.children.borrow().iter() {
                        if let Some(node) = self.convert_node(child) {
                            element.append_child(node);
                        }
                    }
                }

                Some(element.into())
            }
        }
    }
}

fn qualified(prefix: Option<&str>, local: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_dom::namespace;

    fn find<'a>(node: &'a Node, name: &str) -> Option<&'a Element> {
        if let Some(element) = node.as_element() {
            if element.node_name() == name {
                return Some(element);
            }
        }
        node.child_nodes().iter().find_map(|child| find(child, name))
    }

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html).unwrap();

        let p = find(&doc, "p").unwrap();
        assert!(p.is("p", namespace::HTML));
        assert_eq!(p.child_nodes().len(), 1);
    }

    #[test]
    fn test_parse_fragment() {
        let doc = HtmlParser::new().parse("<div><span>Text</span></div>").unwrap();

        // Fragments get wrapped in html/head/body by html5ever
        assert!(find(&doc, "html").is_some());
        assert!(find(&doc, "body").is_some());
        assert!(find(&doc, "span").is_some());
    }

    #[test]
    fn test_foreign_content_namespaces() {
        let doc = HtmlParser::new()
            .parse("<svg><circle/></svg><math><mi>x</mi></math>")
            .unwrap();

        assert!(find(&doc, "circle").unwrap().is("circle", namespace::SVG));
        assert!(find(&doc, "mi").unwrap().is("mi", namespace::MATHML));
    }

    #[test]
    fn test_foreign_attribute_metadata() {
        let doc = HtmlParser::new()
            .parse(r##"<svg><use xlink:href="#a"/></svg>"##)
            .unwrap();

        let attr = find(&doc, "use").unwrap().attributes().get("xlink:href").unwrap();
        assert_eq!(attr.namespace(), Some(namespace::XLINK));
        assert_eq!(attr.prefix(), Some("xlink"));
        assert_eq!(attr.value(), "#a");
    }

    #[test]
    fn test_doctype_and_comment() {
        let doc = HtmlParser::new()
            .parse("<!DOCTYPE html><!-- hi --><p>x</p>")
            .unwrap();

        let kinds: Vec<_> = doc.child_nodes().iter().map(Node::node_name).collect();
        assert_eq!(kinds, vec!["html", "#comment", "html"]);
    }

    #[test]
    fn test_doctype_identifiers() {
        let doc = HtmlParser::new()
            .parse(
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd"><p>x</p>"#,
            )
            .unwrap();

        let Some(Node::DocumentType(doctype)) = doc.child_nodes().first() else {
            panic!("expected a doctype first");
        };
        assert_eq!(doctype.name(), "html");
        assert_eq!(doctype.public_id(), "-//W3C//DTD HTML 4.01//EN");
        assert_eq!(doctype.system_id(), "http://www.w3.org/TR/html4/strict.dtd");
    }
}
