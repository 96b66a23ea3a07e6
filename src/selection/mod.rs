//! Selections: ordered, non-owning views over nodes of one document.
//!
//! A [`Selection`] borrows its document, so the borrow checker guarantees it
//! never outlives the tree it points into. Documents are owned by
//! [`Parsed`], which is what parsing (and re-parsing synthesized markup, see
//! [`rename_tag`](Selection::rename_tag)) hands back.
//!
//! ```
//! use domwalk::{HtmlDocument, Parsed};
//!
//! let parsed = Parsed::<HtmlDocument>::parse("<div><p>a</p><p>b</p></div>").unwrap();
//! let body = parsed.content_root();
//! let paragraphs = body.find("p").unwrap();
//! assert_eq!(paragraphs.len(), 2);
//! assert_eq!(paragraphs.first().parent().tag_name(), Some("div"));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::dom::Dom;
use crate::encoding::decode_markup;
use crate::error::{Error, Result};
use crate::serial::flatten;

/// An owned, parsed document.
#[derive(Debug)]
pub struct Parsed<D> {
    doc: D,
}

impl<D: Dom> Parsed<D> {
    /// Parses markup text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the backend rejects the markup.
    pub fn parse(markup: &str) -> Result<Self> {
        D::parse(markup).map(|doc| Self { doc })
    }

    /// Reads, decodes and parses a markup file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, [`Error::Encoding`]
    /// if its bytes cannot be decoded, and [`Error::Parse`] as for
    /// [`Parsed::parse`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "loading markup");
        Self::parse(&decode_markup(&bytes)?)
    }

    /// Wraps an existing document.
    pub fn from_document(doc: D) -> Self {
        Self { doc }
    }

    /// The parsed document.
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// Gives back the document.
    pub fn into_document(self) -> D {
        self.doc
    }

    /// The content root (conventionally `<body>`) as a single-node selection.
    pub fn content_root(&self) -> Selection<'_, D> {
        Selection::new(&self.doc, vec![self.doc.content_root()])
    }

    /// Every top-level element under the content root.
    ///
    /// This is the view to take after parsing synthesized markup, which may
    /// hold one wrapping element or several siblings.
    pub fn top_level(&self) -> Selection<'_, D> {
        Selection::new(&self.doc, self.doc.children(self.doc.content_root()))
    }
}

/// An ordered, possibly empty sequence of nodes from one document.
pub struct Selection<'a, D: Dom> {
    doc: &'a D,
    nodes: Vec<D::NodeId>,
}

impl<D: Dom> Clone for Selection<'_, D> {
    fn clone(&self) -> Self {
        Self {
            doc: self.doc,
            nodes: self.nodes.clone(),
        }
    }
}

impl<D: Dom> fmt::Debug for Selection<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

impl<'a, D: Dom> Selection<'a, D> {
    /// Creates a selection over `nodes`, all of which must belong to `doc`.
    pub fn new(doc: &'a D, nodes: Vec<D::NodeId>) -> Self {
        Self { doc, nodes }
    }

    /// A selection with no nodes.
    pub fn empty(doc: &'a D) -> Self {
        Self::new(doc, Vec::new())
    }

    /// The document this selection points into.
    pub fn document(&self) -> &'a D {
        self.doc
    }

    /// The selected node handles, in order.
    pub fn nodes(&self) -> &[D::NodeId] {
        &self.nodes
    }

    /// Number of selected nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node is selected.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first node handle, if any.
    pub fn first_node(&self) -> Option<D::NodeId> {
        self.nodes.first().copied()
    }

    /// A selection of just the first node (empty if this one is empty).
    #[must_use]
    pub fn first(&self) -> Self {
        self.get(0)
    }

    /// A selection of just the node at `index` (empty if out of range).
    #[must_use]
    pub fn get(&self, index: usize) -> Self {
        Self::new(self.doc, self.nodes.get(index).copied().into_iter().collect())
    }

    /// One single-node selection per selected node, in order.
    pub fn iter(&self) -> impl Iterator<Item = Selection<'a, D>> + '_ {
        let doc = self.doc;
        self.nodes.iter().map(move |&n| Selection::new(doc, vec![n]))
    }

    /// The parent of the first node; empty when that node is the topmost
    /// element or the selection is empty.
    #[must_use]
    pub fn parent(&self) -> Self {
        let parent = self.first_node().and_then(|n| self.doc.parent(n));
        Self::new(self.doc, parent.into_iter().collect())
    }

    /// The element children of every selected node, in order.
    #[must_use]
    pub fn children(&self) -> Self {
        let nodes = self
            .nodes
            .iter()
            .flat_map(|&n| self.doc.children(n))
            .collect();
        Self::new(self.doc, nodes)
    }

    /// Descendants of the selected nodes matching `selector`.
    ///
    /// Results keep document order per selected node; a node reachable from
    /// several selected nodes is reported once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Selector`] if the backend rejects the selector.
    pub fn find(&self, selector: &str) -> Result<Self> {
        if let [node] = self.nodes.as_slice() {
            return Ok(Self::new(self.doc, self.doc.select(*node, selector)?));
        }
        let mut seen = HashSet::new();
        let mut found: Vec<D::NodeId> = Vec::new();
        for &node in &self.nodes {
            for hit in self.doc.select(node, selector)? {
                if seen.insert(hit) {
                    found.push(hit);
                }
            }
        }
        Ok(Self::new(self.doc, found))
    }

    /// Tag name of the first node.
    pub fn tag_name(&self) -> Option<&'a str> {
        self.first_node().and_then(|n| self.doc.tag_name(n))
    }

    /// Flattened outer markup of the first node.
    ///
    /// This is the string serialization-equivalence compares.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if the selection is empty or the backend
    /// cannot render the node.
    pub fn html(&self) -> Result<String> {
        let node = self.require_node("outer markup")?;
        Ok(flatten(&self.doc.outer_html(node)?))
    }

    /// Markup of the first node's children, as the backend renders it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if the selection is empty or the backend
    /// cannot render the node.
    pub fn inner_html(&self) -> Result<String> {
        let node = self.require_node("inner markup")?;
        self.doc.inner_html(node)
    }

    /// Returns `true` if both selections point into the same document and
    /// hold exactly the same nodes in the same order.
    pub fn is_same(&self, other: &Selection<'_, D>) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.nodes == other.nodes
    }

    /// Returns `true` if at least one node of this selection is also in
    /// `other` (identity, not markup, comparison).
    pub fn is_selection(&self, other: &Selection<'_, D>) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.nodes.iter().any(|n| other.nodes.contains(n))
    }

    /// Returns `true` if both selections point into the same document.
    pub fn shares_document(&self, other: &Selection<'_, D>) -> bool {
        std::ptr::eq(self.doc, other.doc)
    }

    fn require_node(&self, what: &str) -> Result<D::NodeId> {
        self.first_node()
            .ok_or_else(|| Error::Serialize(format!("cannot render {what} of an empty selection")))
    }
}
