//! Error types for structural queries.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the single [`Error`] enum below. Each variant corresponds to one failure
//! kind a caller may want to tell apart: markup that cannot be parsed or
//! rendered, attribute lookups that do not hold, and structural searches that
//! come up empty.
//!
//! None of these are retried or recovered internally. The one operation that
//! deliberately downgrades a failure is
//! [`deepest_match`](crate::matcher::Matcher::deepest_match), and it keeps the
//! error available through [`DeepestMatch::Failed`](crate::matcher::DeepestMatch).

use std::io;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type for all `domwalk` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Markup text could not be turned into a document.
    #[error("parse error: {message}")]
    Parse {
        /// What went wrong.
        message: String,
        /// Byte offset into the input, when the backend knows it.
        offset: Option<usize>,
    },

    /// A node could not be rendered back to markup.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// A required attribute is absent.
    ///
    /// `element` carries the flattened markup of the offending element when
    /// the caller asked for it (see
    /// [`require_attr`](crate::Selection::require_attr)); it is not truncated.
    #[error("attribute '{name}' does not exist{}", element_suffix(.element))]
    MissingAttribute {
        /// The attribute that was looked up.
        name: String,
        /// Markup of the element that lacks the attribute.
        element: Option<String>,
    },

    /// An attribute value has fewer space-separated parts than requested.
    #[error("attribute '{name}' has {found} part(s), part {index} requested")]
    MalformedAttribute {
        /// The attribute that was split.
        name: String,
        /// The zero-based part index that was requested.
        index: usize,
        /// How many parts the value actually has.
        found: usize,
    },

    /// An attribute value does not split into exactly the expected number of parts.
    #[error("attribute '{name}' expects {expected} distinct parts, found {found}{}", element_suffix(.element))]
    AttributeArity {
        /// The attribute that was split.
        name: String,
        /// The number of parts the caller requires.
        expected: usize,
        /// The number of parts present.
        found: usize,
        /// Markup of the element carrying the attribute.
        element: Option<String>,
    },

    /// An equivalence or identity search failed to locate a node inside the
    /// expected root.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// An ancestor walk ran out of ancestors (or hit its step bound) before
    /// the stop condition was satisfied.
    #[error("no ancestor satisfied the stop condition after {steps} step(s)")]
    AncestorNotFound {
        /// Parent hops taken before giving up.
        steps: usize,
    },

    /// The arguments to an operation are meaningless, e.g. asking for the
    /// depth of a node inside itself.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A selector string was rejected by the query backend.
    #[error("invalid selector '{selector}': {message}")]
    Selector {
        /// The selector as given.
        selector: String,
        /// The backend's explanation.
        message: String,
    },

    /// Raw input bytes could not be decoded to text.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Reading input failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Builds a [`Error::Parse`] without location information.
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            offset: None,
        }
    }

    /// Builds a [`Error::Parse`] pointing at a byte offset.
    pub(crate) fn parse_at(message: impl Into<String>, offset: usize) -> Self {
        Self::Parse {
            message: message.into(),
            offset: Some(offset),
        }
    }
}

fn element_suffix(element: &Option<String>) -> String {
    match element {
        Some(markup) => format!(" in element: {markup}"),
        None => String::new(),
    }
}
