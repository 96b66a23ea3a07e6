//! # domwalk
//!
//! Structural queries over parsed HTML: locate a node inside a root, measure
//! how deep it sits, count or search its ancestors, pick the deepest match
//! among several selectors, read attributes in bulk, and rename elements by
//! re-parsing synthesized markup.
//!
//! Everything is generic over the [`Dom`] trait. Two backends ship with the
//! crate:
//!
//! - [`HtmlDocument`], built on `scraper` (html5ever parsing, CSS selectors).
//! - [`Document`], an in-memory arena tree with a small tolerant reader and
//!   tag-name queries, also usable as a programmatic builder.
//!
//! ## Quick Start
//!
//! ```
//! use domwalk::{HtmlDocument, Parsed};
//! use domwalk::matcher::{count_matching_ancestor_tags, deepest_match, depth};
//!
//! let parsed = Parsed::<HtmlDocument>::parse(
//!     r#"<div id="a"><p><span>x</span></p><b>y</b></div>"#,
//! )
//! .unwrap();
//! let div = parsed.top_level();
//! let span = div.find("span").unwrap();
//!
//! assert_eq!(depth(&div, &span).unwrap(), 2);
//! assert_eq!(count_matching_ancestor_tags(&div, &span, &["p"]).unwrap(), 1);
//!
//! let deepest = deepest_match(&div, &["b", "span"]).into_option().unwrap();
//! assert_eq!(deepest.html().unwrap(), "<span>x</span>");
//!
//! let renamed = div.rename_tag("section").unwrap();
//! assert_eq!(renamed.top_level().attr("id").unwrap(), "a");
//! ```

pub mod attr;
pub mod dom;
pub mod encoding;
pub mod error;
pub mod html;
pub mod matcher;
pub mod rewrite;
pub mod selection;
pub mod serial;
pub mod tree;
pub mod walk;

// Re-export primary types at the crate root for convenience.
pub use dom::Dom;
pub use error::{Error, Result};
pub use html::HtmlDocument;
pub use matcher::{DeepestMatch, Locate, Matcher, MatcherConfig};
pub use selection::{Parsed, Selection};
pub use tree::Document;
pub use walk::{Climb, DEFAULT_MAX_CLIMB};
