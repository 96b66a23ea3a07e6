//! The document capability every structural query is written against.
//!
//! `domwalk` does not tokenize markup, evaluate selectors, or render nodes
//! itself. Those jobs belong to a backend that implements [`Dom`]:
//!
//! - **parse**: markup text to a document with a content root
//! - **query**: node + selector to an ordered list of descendant nodes
//! - **serialize**: node to outer (or inner) markup text
//! - **attributes**: node to an ordered list of `(name, value)` pairs
//!
//! plus the navigation primitives (`parent`, `children`, `tag_name`) that the
//! ancestor walker needs.
//!
//! Two backends ship with the crate: [`HtmlDocument`](crate::html::HtmlDocument)
//! (html5ever + CSS selectors through `scraper`) and the in-memory arena
//! [`Document`](crate::tree::Document), which is small enough to reason about
//! exactly in tests.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

/// A parsed document that structural queries can navigate.
///
/// Nodes are addressed by [`Dom::NodeId`], a cheap copyable handle that is
/// stable for the lifetime of the document. Two handles compare equal only if
/// they name the same node, which gives the crate a real identity check in
/// addition to markup equivalence.
///
/// Navigation methods only ever report *element* nodes: `parent` skips the
/// document node above the topmost element, and `children`/`select` never
/// yield text or comments.
pub trait Dom: Sized {
    /// Opaque, stable node handle.
    type NodeId: Copy + Eq + Hash + Debug;

    /// Parses markup text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`](crate::Error::Parse) if the backend cannot
    /// produce a tree with a content root.
    fn parse(markup: &str) -> Result<Self>;

    /// The element under which the document's meaningful markup lives
    /// (conventionally `<body>`).
    fn content_root(&self) -> Self::NodeId;

    /// The parent element of `node`, or `None` for the topmost element.
    fn parent(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// The element children of `node`, in document order.
    fn children(&self, node: Self::NodeId) -> Vec<Self::NodeId>;

    /// The element's tag name, or `None` for non-element nodes.
    fn tag_name(&self, node: Self::NodeId) -> Option<&str>;

    /// The element's attributes in source order. Empty for non-elements.
    fn attributes(&self, node: Self::NodeId) -> Vec<(&str, &str)>;

    /// Strict descendants of `node` matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Selector`](crate::Error::Selector) if the backend
    /// cannot interpret the selector. A valid selector with no matches is an
    /// empty `Vec`, not an error.
    fn select(&self, node: Self::NodeId, selector: &str) -> Result<Vec<Self::NodeId>>;

    /// Markup of `node` including its own tags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`](crate::Error::Serialize) if the node cannot
    /// be rendered.
    fn outer_html(&self, node: Self::NodeId) -> Result<String>;

    /// Markup of the children of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`](crate::Error::Serialize) if the node cannot
    /// be rendered.
    fn inner_html(&self, node: Self::NodeId) -> Result<String>;

    /// Looks up a single attribute value.
    fn attribute(&self, node: Self::NodeId, name: &str) -> Option<&str> {
        self.attributes(node)
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}
