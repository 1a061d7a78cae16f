//! HTML node tree and its rendering contract.
//!
//! The tree has exactly two kinds of node. A [`LeafNode`] holds a value and
//! an optional tag; without a tag it renders as bare text. A [`ParentNode`]
//! owns an ordered list of children. Every field that may legitimately be
//! missing is an `Option`, so an absent child list and an empty one are
//! different values:
//!
//! ```rust
//! use mdtree_core::node::{LeafNode, ParentNode};
//!
//! let empty = ParentNode::new("p", Vec::new());
//! assert_eq!(empty.to_html().unwrap(), "<p></p>");
//!
//! let unset = ParentNode { children: None, ..ParentNode::new("p", Vec::new()) };
//! assert!(unset.to_html().is_err());
//!
//! let link = LeafNode::new("a", "docs").with_attr("href", "/docs");
//! assert_eq!(link.to_html().unwrap(), r#"<a href="/docs">docs</a>"#);
//! ```
//!
//! Attribute values and text are written as given. Nothing is escaped.

use crate::error::{Error, Result};

/// Ordered attribute mapping with unique keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    ///
    /// An existing key keeps its position and the previous value is
    /// returned; a new key goes to the end.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// ` key="value" key2="value2"`, or an empty string when there are no
    /// attributes.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        for (key, value) in &self.entries {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// A node without children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    /// Element name; `None` renders the value as bare text.
    pub tag: Option<String>,
    /// Content. Must be present at render time; may be empty.
    pub value: Option<String>,
    pub attrs: Attributes,
}

impl LeafNode {
    /// A tagged leaf: `<tag>value</tag>`.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// An untagged leaf that renders as its value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Append the rendered leaf to `out`.
    pub fn render_into(&self, out: &mut String) -> Result<()> {
        let value = self.value.as_deref().ok_or_else(|| Error::MissingValue {
            tag: self.tag.clone(),
        })?;

        match &self.tag {
            None => out.push_str(value),
            Some(tag) => {
                open_tag(out, tag, &self.attrs);
                out.push_str(value);
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

/// A node owning an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentNode {
    /// Element name. Must be present at render time.
    pub tag: Option<String>,
    /// Children in document order. `Some(vec![])` renders as an empty
    /// element; `None` is an error.
    pub children: Option<Vec<HtmlNode>>,
    pub attrs: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            attrs: Attributes::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    /// Append a child, creating the child list if it is unset.
    pub fn push(&mut self, child: impl Into<HtmlNode>) {
        self.children.get_or_insert_with(Vec::new).push(child.into());
    }

    /// Children as a slice; empty when unset.
    pub fn children(&self) -> &[HtmlNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Append the rendered element and all of its descendants to `out`.
    pub fn render_into(&self, out: &mut String) -> Result<()> {
        let tag = self.tag.as_deref().ok_or(Error::MissingTag)?;
        let children = self
            .children
            .as_ref()
            .ok_or_else(|| Error::MissingChildren {
                tag: tag.to_string(),
            })?;

        open_tag(out, tag, &self.attrs);
        for child in children {
            child.render_into(out)?;
        }
        close_tag(out, tag);
        Ok(())
    }
}

/// Any renderable node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attrs,
            HtmlNode::Parent(parent) => &parent.attrs,
        }
    }

    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    pub fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render_into(out),
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(node: LeafNode) -> Self {
        HtmlNode::Leaf(node)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(node: ParentNode) -> Self {
        HtmlNode::Parent(node)
    }
}

#[inline]
fn open_tag(out: &mut String, tag: &str, attrs: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attrs.render_into(out);
    out.push('>');
}

#[inline]
fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
