//! HTML to XML pipeline tests
//!
//! Parses markup with html5ever and converts the result with weft-xml.

use weft_dom::namespace::{HTML, MATHML, SVG, XLINK};
use weft_html::HtmlParser;
use weft_xml::{NodeId, XmlAttr, XmlDocument, convert};

fn to_xml(html: &str) -> XmlDocument {
    let source = HtmlParser::new().parse(html).unwrap();
    convert(&source).unwrap()
}

#[test]
fn test_html_skeleton() {
    let doc = to_xml("<title>t</title><p>Hello</p>");

    let root = doc.document_element().unwrap();
    let html = doc.element(root).unwrap();
    assert_eq!(html.namespace_uri(), Some(HTML));
    assert_eq!(html.local_name(), "html");
    assert_eq!(doc.elements_by_tag_name_ns(Some(HTML), "p").len(), 1);
    assert_eq!(doc.text_content(root), "tHello");
}

#[test]
fn test_doctype_is_not_copied() {
    let doc = to_xml("<!DOCTYPE html><p>x</p>");

    let top: Vec<_> = doc.children(NodeId::DOCUMENT).collect();
    assert_eq!(top.len(), 1);
    assert!(top[0].1.as_element().is_some());
}

#[test]
fn test_use_href_resolves_to_xlink() {
    let doc = to_xml(
        r##"<html><body><svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg></body></html>"##,
    );

    let uses = doc.elements_by_tag_name_ns(Some(SVG), "use");
    assert_eq!(uses.len(), 1);
    let href = doc
        .element(uses[0])
        .unwrap()
        .attribute_ns(Some(XLINK), "href")
        .unwrap();
    assert_eq!(href.local_name(), "href");
    assert_eq!(href.prefix(), Some("xlink"));
    assert_eq!(href.value(), "#a");

    let svg = doc.elements_by_tag_name_ns(Some(SVG), "svg");
    assert!(doc.element(svg[0]).unwrap().attributes().is_empty());
}

#[test]
fn test_undeclared_xlink_keeps_parser_namespace() {
    let doc = to_xml(r##"<svg><a xlink:href="#b">link</a></svg>"##);

    let anchors = doc.elements_by_tag_name_ns(Some(SVG), "a");
    let attrs = doc.element(anchors[0]).unwrap().attributes();
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].namespace_uri(), Some(XLINK));
    assert_eq!(attrs[0].prefix(), Some("xlink"));
}

#[test]
fn test_mathml_and_plain_attributes() {
    let doc = to_xml(r#"<div class="c" id="d"><math><mi mathvariant="bold">x</mi></math></div>"#);

    let div = doc.elements_by_tag_name_ns(Some(HTML), "div");
    let names: Vec<String> = doc
        .element(div[0])
        .unwrap()
        .attributes()
        .iter()
        .map(XmlAttr::name)
        .collect();
    assert_eq!(names, vec!["class", "id"]);

    let mi = doc.elements_by_tag_name_ns(Some(MATHML), "mi");
    let variant = doc.element(mi[0]).unwrap().attribute_ns(None, "mathvariant");
    assert_eq!(variant.map(XmlAttr::value), Some("bold"));
}
