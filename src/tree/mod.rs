//! Arena-based in-memory document tree.
//!
//! All nodes live in a contiguous `Vec<NodeData>` owned by the [`Document`]
//! and are referenced by [`NodeId`], a newtype over `NonZeroU32`. Navigation
//! links (parent, first/last child, siblings) are arena indices, so the tree
//! has no reference cycles and drops in one go.
//!
//! Every `Document` is created with an `html > body` skeleton; `body` is the
//! content root that parsed or built markup hangs off. Documents can be filled
//! either programmatically ([`Document::create_element`] and friends) or from
//! markup through the tolerant reader in [`reader`].
//!
//! The query side understands only tag-name selectors (`"b"`, `"b, i"`,
//! `"*"`). That is all the structural matcher needs, and it keeps this backend
//! fully predictable, which is what tests want from it.
//!
//! # Examples
//!
//! ```
//! use domwalk::dom::Dom;
//! use domwalk::tree::Document;
//!
//! let doc = Document::parse("<div><p>hi</p></div>").unwrap();
//! let div = doc.children(doc.body())[0];
//! assert_eq!(doc.tag_name(div), Some("div"));
//! assert_eq!(doc.outer_html(div).unwrap(), "<div><p>hi</p></div>");
//! ```

mod node;
pub mod reader;

pub use node::NodeKind;
pub use reader::ReadOptions;

use std::num::NonZeroU32;

use crate::dom::Dom;
use crate::error::{Error, Result};
use crate::serial;

/// A typed index into the document's node arena.
///
/// `Option<NodeId>` has the same size as `NodeId` thanks to the `NonZeroU32`
/// niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    #[allow(clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Self {
        // Index 0 is the arena placeholder, so every allocated index is >= 1.
        Self(NonZeroU32::MIN.saturating_add(index.saturating_sub(1) as u32))
    }

    fn as_index(self) -> usize {
        self.0.get() as usize
    }
}

/// Storage for a single node in the arena.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// What kind of node this is and its payload.
    pub kind: NodeKind,
    /// Parent node. Only the document node has none.
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Last child node (for O(1) append).
    pub last_child: Option<NodeId>,
    /// Next sibling.
    pub next_sibling: Option<NodeId>,
    /// Previous sibling.
    pub prev_sibling: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercase attribute name.
    pub name: String,
    /// The decoded attribute value.
    pub value: String,
}

impl Attribute {
    /// Creates an attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An in-memory document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The node arena. Index 0 is unused (placeholder for `NonZeroU32`).
    nodes: Vec<NodeData>,
    root: NodeId,
    body: NodeId,
}

impl Document {
    /// Creates a document holding an empty `html > body` skeleton.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![NodeData::new(NodeKind::Document)],
            root: NodeId::from_index(1),
            body: NodeId::from_index(1),
        };
        let root = doc.create_node(NodeKind::Document);
        let html = doc.create_element("html");
        let body = doc.create_element("body");
        doc.append_child(root, html);
        doc.append_child(html, body);
        doc.root = root;
        doc.body = body;
        doc
    }

    /// Parses markup with explicit reader options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on unterminated tags, comments or attribute
    /// values, or when the nesting limit is exceeded.
    pub fn parse_with_options(markup: &str, options: &ReadOptions) -> Result<Self> {
        reader::read(markup, options)
    }

    /// The document node (above `<html>`).
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `<body>` element, which is the content root.
    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Returns the `NodeData` for the given node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this document.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.as_index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.as_index()]
    }

    /// Returns the tag name of an element node.
    #[must_use]
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the content of a text or comment node.
    #[must_use]
    pub fn node_text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Text { content } | NodeKind::Comment { content } => Some(content),
            _ => None,
        }
    }

    /// Returns the attributes of an element node (empty for other kinds).
    #[must_use]
    pub fn element_attributes(&self, id: NodeId) -> &[Attribute] {
        match &self.node(id).kind {
            NodeKind::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    /// Sets an attribute, replacing the value if the name already exists.
    ///
    /// Has no effect on non-element nodes.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeKind::Element { attributes, .. } = &mut self.node_mut(id).kind {
            if let Some(existing) = attributes.iter_mut().find(|a| a.name == name) {
                existing.value = value.to_string();
            } else {
                attributes.push(Attribute::new(name, value));
            }
        }
    }

    // --- Navigation ---

    /// Returns the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    /// Returns the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// Returns an iterator over all children of a node, of every kind.
    pub fn child_nodes(&self, id: NodeId) -> Children<'_> {
        Children {
            doc: self,
            next: self.node(id).first_child,
        }
    }

    /// Returns a depth-first iterator over the strict descendants of a node.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            root: id,
            next: self.first_child(id),
        }
    }

    // --- Mutation ---

    fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(NodeData::new(kind));
        NodeId::from_index(index)
    }

    /// Allocates a detached element with no attributes.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.create_node(NodeKind::Element {
            name: name.to_ascii_lowercase(),
            attributes: Vec::new(),
        })
    }

    /// Allocates a detached text node.
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.create_node(NodeKind::Text {
            content: content.to_string(),
        })
    }

    /// Allocates a detached comment node.
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.create_node(NodeKind::Comment {
            content: content.to_string(),
        })
    }

    /// Appends a child node to the end of a parent's child list.
    ///
    /// The child must be detached; appending a node that already has a parent
    /// would corrupt the sibling links.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            self.node(child).parent.is_none(),
            "child already has a parent"
        );

        self.node_mut(child).parent = Some(parent);

        if let Some(last) = self.node(parent).last_child {
            self.node_mut(last).next_sibling = Some(child);
            self.node_mut(child).prev_sibling = Some(last);
            self.node_mut(parent).last_child = Some(child);
        } else {
            self.node_mut(parent).first_child = Some(child);
            self.node_mut(parent).last_child = Some(child);
        }
    }

    /// Returns the total number of nodes in the arena (excluding the placeholder).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for Document {
    type NodeId = NodeId;

    fn parse(markup: &str) -> Result<Self> {
        reader::read(markup, &ReadOptions::default())
    }

    fn content_root(&self) -> NodeId {
        self.body
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)
            .parent
            .filter(|&p| self.node(p).kind.is_element())
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.child_nodes(node)
            .filter(|&c| self.node(c).kind.is_element())
            .collect()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.node_name(node)
    }

    fn attributes(&self, node: NodeId) -> Vec<(&str, &str)> {
        self.element_attributes(node)
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
            .collect()
    }

    fn select(&self, node: NodeId, selector: &str) -> Result<Vec<NodeId>> {
        let names = parse_tag_list(selector)?;
        Ok(self
            .descendants(node)
            .filter(|&d| {
                self.node_name(d).is_some_and(|tag| {
                    names
                        .iter()
                        .any(|n| n == "*" || n.eq_ignore_ascii_case(tag))
                })
            })
            .collect())
    }

    fn outer_html(&self, node: NodeId) -> Result<String> {
        let mut out = String::new();
        serial::write_node(self, node, &mut out);
        Ok(out)
    }

    fn inner_html(&self, node: NodeId) -> Result<String> {
        if !self.node(node).kind.is_element() {
            return Err(Error::Serialize(
                "inner markup requested for a non-element node".to_string(),
            ));
        }
        let mut out = String::new();
        for child in self.child_nodes(node) {
            serial::write_node(self, child, &mut out);
        }
        Ok(out)
    }
}

/// Splits a selector group into tag names, rejecting anything richer.
fn parse_tag_list(selector: &str) -> Result<Vec<String>> {
    let unsupported = |message: &str| Error::Selector {
        selector: selector.to_string(),
        message: message.to_string(),
    };

    let mut names = Vec::new();
    for part in selector.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(unsupported("empty selector"));
        }
        let valid = part == "*"
            || (part.starts_with(|c: char| c.is_ascii_alphabetic())
                && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
        if !valid {
            return Err(unsupported("only tag-name selectors are supported"));
        }
        names.push(part.to_ascii_lowercase());
    }
    Ok(names)
}

// --- Iterators ---

/// Iterator over the children of a node.
pub struct Children<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.node(current).next_sibling;
        Some(current)
    }
}

/// Depth-first (document order) iterator over the strict descendants of a node.
pub struct Descendants<'a> {
    doc: &'a Document,
    root: NodeId,
    next: Option<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        if let Some(child) = self.doc.first_child(current) {
            self.next = Some(child);
            return Some(current);
        }

        if let Some(sibling) = self.doc.next_sibling(current) {
            self.next = Some(sibling);
            return Some(current);
        }

        // Walk up to find an ancestor with a next sibling, without leaving the subtree.
        let mut ancestor = self.doc.node(current).parent;
        while let Some(anc) = ancestor {
            if anc == self.root {
                break;
            }
            if let Some(sibling) = self.doc.next_sibling(anc) {
                self.next = Some(sibling);
                return Some(current);
            }
            ancestor = self.doc.node(anc).parent;
        }

        self.next = None;
        Some(current)
    }
}
