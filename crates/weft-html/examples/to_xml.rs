//! Example: parse HTML and convert it to a namespace-aware XML document
//!
//! Reads a file named on the command line, or stdin.

use std::io::Read;

use weft_html::HtmlParser;
use weft_xml::{NodeId, XmlDocument, XmlNodeData, convert};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut html = String::new();
    match std::env::args().nth(1) {
        Some(path) => html = std::fs::read_to_string(path)?,
        None => {
            std::io::stdin().read_to_string(&mut html)?;
        }
    }

    let source = HtmlParser::new().parse(&html)?;
    let doc = convert(&source)?;

    dump(&doc, NodeId::DOCUMENT, 0);
    Ok(())
}

fn dump(doc: &XmlDocument, id: NodeId, depth: usize) {
    for (child, node) in doc.children(id) {
        let indent = "  ".repeat(depth);
        match &node.data {
            XmlNodeData::Element(element) => {
                let ns = element.namespace_uri().unwrap_or("");
                println!("{indent}<{}> {{{ns}}}", element.tag_name());
                for attr in element.attributes() {
                    let ns = attr.namespace_uri().unwrap_or("");
                    println!("{indent}  @{}={:?} {{{ns}}}", attr.name(), attr.value());
                }
                dump(doc, child, depth + 1);
            }
            XmlNodeData::Text(text) => println!("{indent}{text:?}"),
            XmlNodeData::Comment(comment) => println!("{indent}<!--{comment}-->"),
            XmlNodeData::Document => {}
        }
    }
}
