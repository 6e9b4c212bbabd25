//! Element Attributes
//!
//! Ordered attribute collection keyed by qualified name.

/// Single attribute as delivered by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeNode {
    name: String,
    value: String,
    namespace: Option<String>,
    prefix: Option<String>,
}

impl AttributeNode {
    /// Attribute with no namespace and no explicit prefix
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            namespace: None,
            prefix: None,
        }
    }

    /// Attribute with namespace metadata already decided by the parser
    pub fn with_namespace(
        name: impl Into<String>,
        value: impl Into<String>,
        namespace: Option<String>,
        prefix: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            namespace,
            prefix,
        }
    }

    /// Qualified name, possibly `prefix:local`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Namespace assigned by the parser, if any
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Explicit prefix, or the part of the name before the first `:`
    pub fn prefix(&self) -> Option<&str> {
        self.prefix
            .as_deref()
            .or_else(|| self.name.split_once(':').map(|(prefix, _)| prefix))
    }

    /// Name without its prefix
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }
}

/// Attribute set of an element, in insertion order
///
/// No two entries share a qualified name. Elements rarely carry more than a
/// handful of attributes so lookups scan linearly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<AttributeNode>,
}

impl Attributes {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get attribute by qualified name
    pub fn get(&self, name: &str) -> Option<&AttributeNode> {
        self.entries.iter().find(|attr| attr.name == name)
    }

    /// Get attribute value by qualified name
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(AttributeNode::value)
    }

    /// Check if attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AttributeNode> {
        self.entries.iter_mut().find(|attr| attr.name == name)
    }

    /// Insert an attribute, returning the one it replaced
    ///
    /// A replaced attribute keeps its original position.
    pub fn put(&mut self, attr: AttributeNode) -> Option<AttributeNode> {
        match self.entries.iter_mut().find(|existing| existing.name == attr.name) {
            Some(existing) => Some(std::mem::replace(existing, attr)),
            None => {
                self.entries.push(attr);
                None
            }
        }
    }

    /// Insert a plain name/value attribute
    pub fn put_value(&mut self, name: &str, value: &str) -> Option<AttributeNode> {
        self.put(AttributeNode::new(name, value))
    }

    /// Remove attribute by qualified name
    pub fn remove(&mut self, name: &str) -> Option<AttributeNode> {
        let index = self.entries.iter().position(|attr| attr.name == name)?;
        Some(self.entries.remove(index))
    }

    /// Qualified names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(AttributeNode::name)
    }

    /// Iterate over attributes in order
    pub fn iter(&self) -> std::slice::Iter<'_, AttributeNode> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a AttributeNode;
    type IntoIter = std::slice::Iter<'a, AttributeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<AttributeNode> for Attributes {
    fn from_iter<I: IntoIterator<Item = AttributeNode>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for attr in iter {
            attrs.put(attr);
        }
        attrs
    }
}
