//! Node type definitions.
//!
//! The `NodeKind` enum carries the node-type-specific payload. Navigation
//! links (parent, children, siblings) live in `NodeData`, not here.

use super::Attribute;

/// The kind of a node and its associated data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The document node. There is exactly one per `Document` and it sits
    /// above the topmost element.
    Document,

    /// An element node, e.g. `<div class="x">`.
    Element {
        /// Lowercase tag name.
        name: String,
        /// Attributes in source order. Names are unique within an element.
        attributes: Vec<Attribute>,
    },

    /// Character data, already decoded (character references resolved).
    Text {
        /// The text content.
        content: String,
    },

    /// A comment, without the `<!--` and `-->` delimiters.
    Comment {
        /// The comment text.
        content: String,
    },
}

impl NodeKind {
    /// Returns `true` for element nodes.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }
}
