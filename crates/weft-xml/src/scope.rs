//! Namespace binding frames and qualified-name helpers

/// Prefix bindings in effect for one element's subtree
///
/// The empty prefix is the default namespace. Frames are copied when an
/// element opens, so a child's declarations never reach its siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceScope {
    bindings: Vec<(String, String)>,
}

impl NamespaceScope {
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind `prefix` to `uri`, replacing an inherited binding
    pub fn declare(&mut self, prefix: &str, uri: &str) {
        match self.bindings.iter_mut().find(|(bound, _)| bound == prefix) {
            Some((_, existing)) => *existing = uri.to_string(),
            None => self.bindings.push((prefix.to_string(), uri.to_string())),
        }
    }

    /// URI bound to `prefix`
    pub fn lookup(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    /// Resolve a prefix, keeping `fallback` when it is empty or unbound
    pub fn resolve<'a>(&'a self, prefix: &str, fallback: Option<&'a str>) -> Option<&'a str> {
        if prefix.is_empty() {
            return fallback;
        }
        match self.lookup(prefix) {
            Some(uri) => {
                tracing::trace!(prefix, uri, "prefix resolved from scope");
                Some(uri)
            }
            None => fallback,
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Prefix declared by an `xmlns` or `xmlns:*` attribute
///
/// `Some("")` for a bare `xmlns`, `None` for ordinary attributes.
pub fn declared_prefix(attr_name: &str) -> Option<&str> {
    if attr_name == "xmlns" {
        Some("")
    } else {
        attr_name.strip_prefix("xmlns:")
    }
}

/// Split `prefix:local` at the first colon; the prefix is empty when absent
pub fn split_qualified_name(name: &str) -> (&str, &str) {
    name.split_once(':').unwrap_or(("", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_prefix() {
        assert_eq!(declared_prefix("xmlns"), Some(""));
        assert_eq!(declared_prefix("xmlns:svg"), Some("svg"));
        assert_eq!(declared_prefix("xmlnsfoo"), None);
        assert_eq!(declared_prefix("href"), None);
        assert_eq!(declared_prefix("xlink:href"), None);
    }

    #[test]
    fn test_split_qualified_name() {
        assert_eq!(split_qualified_name("svg:rect"), ("svg", "rect"));
        assert_eq!(split_qualified_name("rect"), ("", "rect"));
        assert_eq!(split_qualified_name("a:b:c"), ("a", "b:c"));
    }

    #[test]
    fn test_declare_overrides() {
        let mut scope = NamespaceScope::new();
        scope.declare("a", "urn:one");
        scope.declare("a", "urn:two");

        assert_eq!(scope.len(), 1);
        assert_eq!(scope.lookup("a"), Some("urn:two"));
    }

    #[test]
    fn test_copy_does_not_alias() {
        let mut parent = NamespaceScope::new();
        parent.declare("a", "urn:a");

        let mut child = parent.clone();
        child.declare("b", "urn:b");

        assert_eq!(parent.lookup("b"), None);
        assert_eq!(child.lookup("a"), Some("urn:a"));
    }

    #[test]
    fn test_resolve_fallback() {
        let mut scope = NamespaceScope::new();
        scope.declare("a", "urn:a");
        scope.declare("", "urn:default");

        assert_eq!(scope.resolve("a", Some("urn:orig")), Some("urn:a"));
        assert_eq!(scope.resolve("z", Some("urn:orig")), Some("urn:orig"));
        assert_eq!(scope.resolve("z", None), None);
        // Unprefixed names keep their own namespace
        assert_eq!(scope.resolve("", Some("urn:orig")), Some("urn:orig"));
    }
}
