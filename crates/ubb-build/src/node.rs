//! The UBB document tree.
//!
//! A parsed document is a single [`RootNode`] owning an ordered list of
//! children, each either a nested [`TagNode`] or a literal [`TextNode`].
//! Every child is exclusively owned by its parent, so the tree is acyclic
//! and each node is visited exactly once during a build.
//!
//! The engine never creates or mutates a tree: parsers assemble one with the
//! builder-style constructors here and hand it over read-only.
//!
//! # Example
//!
//! ```rust
//! use ubb_build::{Node, RootNode, TagNode};
//!
//! // [b]hi[/b] world
//! let root = RootNode::new()
//!     .child(TagNode::new("b").child(Node::text("hi")))
//!     .child(Node::text(" world"));
//!
//! assert_eq!(root.children.len(), 2);
//! ```

use std::collections::HashMap;

/// A child of the root or of a tag node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A markup element, possibly with nested content.
    Tag(TagNode),
    /// A literal text leaf.
    Text(TextNode),
}

impl Node {
    /// Creates a text child.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(TextNode::new(content))
    }
}

impl From<TagNode> for Node {
    fn from(node: TagNode) -> Self {
        Node::Tag(node)
    }
}

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Node::Text(node)
    }
}

/// The document root. Exactly one exists per parsed document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootNode {
    /// Top-level children in document order.
    pub children: Vec<Node>,
}

impl RootNode {
    /// Creates an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child, preserving document order.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

/// A markup element: `[name=value]content[/name]`.
///
/// `closed` records whether the parser matched a full open/close pair for
/// this tag. Only closed tags are eligible for exact-name handler lookup;
/// see [`crate::HandlerHub`]. `inner_text` is the raw source text between
/// the markers, kept for handlers that render content themselves instead of
/// recursing (links, embeds).
#[derive(Debug, Clone, PartialEq)]
pub struct TagNode {
    /// The tag name, e.g. `"b"` or `"color"`.
    pub name: String,
    /// Tag-specific attributes parsed from the opening marker.
    pub attrs: HashMap<String, String>,
    /// Whether the open/close pair was fully matched during parsing.
    pub closed: bool,
    /// Raw source text between the open and close markers.
    pub inner_text: String,
    /// Nested children in document order.
    pub children: Vec<Node>,
}

impl TagNode {
    /// Creates a closed tag with the given name and no content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: HashMap::new(),
            closed: true,
            inner_text: String::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Marks the tag as lacking a matched close marker.
    pub fn unclosed(mut self) -> Self {
        self.closed = false;
        self
    }

    /// Sets the raw inner text.
    pub fn inner_text(mut self, text: impl Into<String>) -> Self {
        self.inner_text = text.into();
        self
    }

    /// Appends a child, preserving document order.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Looks up an attribute value.
    pub fn attr_value(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// A literal text leaf. Never has children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    /// The literal text content.
    pub text: String,
}

impl TextNode {
    /// Creates a text leaf.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
