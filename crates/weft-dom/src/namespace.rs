//! Well-known namespace URIs
//!
//! The six namespaces an HTML parser can assign on its own. Anything else
//! comes from an explicit `xmlns` declaration in the document.

/// HTML namespace, the default for elements
pub const HTML: &str = "http://www.w3.org/1999/xhtml";
/// SVG namespace
pub const SVG: &str = "http://www.w3.org/2000/svg";
/// MathML namespace
pub const MATHML: &str = "http://www.w3.org/1998/Math/MathML";
/// XLink namespace (`xlink:href` and friends)
pub const XLINK: &str = "http://www.w3.org/1999/xlink";
/// Namespace of `xmlns` declarations themselves
pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";
/// Namespace bound to the `xml` prefix
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

/// All built-in namespaces
pub const RESERVED: [&str; 6] = [HTML, SVG, MATHML, XLINK, XMLNS, XML];

/// Check whether a URI is one of the built-in namespaces
pub fn is_reserved(uri: &str) -> bool {
    RESERVED.contains(&uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_set() {
        assert!(is_reserved(SVG));
        assert!(is_reserved(XMLNS));
        assert!(!is_reserved("urn:example"));
        assert!(!is_reserved(""));
    }
}
