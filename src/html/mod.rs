//! HTML backend built on `scraper` (html5ever tree building + CSS selectors).
//!
//! [`HtmlDocument`] is the default [`Dom`] implementation. Markup is parsed
//! as a full document, so fragments get the implied `html`, `head` and `body`
//! wrappers and `body` becomes the content root. Attribute order follows the
//! source (the `deterministic` feature of `scraper`), which keeps
//! [`attribute_string`](crate::Selection::attribute_string) stable.
//!
//! # Examples
//!
//! ```
//! use domwalk::dom::Dom;
//! use domwalk::html::HtmlDocument;
//!
//! let doc = HtmlDocument::parse("<ul><li>a</li><li>b</li></ul>").unwrap();
//! let items = doc.select(doc.content_root(), "ul > li").unwrap();
//! assert_eq!(items.len(), 2);
//! ```

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node, Selector};

use crate::dom::Dom;
use crate::error::{Error, Result};

/// A document parsed by html5ever.
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
    body: NodeId,
}

impl HtmlDocument {
    /// The underlying `scraper` document.
    #[must_use]
    pub fn as_html(&self) -> &Html {
        &self.html
    }

    /// Parse errors html5ever recovered from, in the order they were seen.
    pub fn recovered_errors(&self) -> impl Iterator<Item = &str> {
        self.html.errors.iter().map(|e| &**e)
    }

    fn element(&self, node: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(node).and_then(ElementRef::wrap)
    }

    fn require_element(&self, node: NodeId) -> Result<ElementRef<'_>> {
        self.element(node)
            .ok_or_else(|| Error::Serialize(format!("node {node:?} is not an element")))
    }
}

impl Dom for HtmlDocument {
    type NodeId = NodeId;

    fn parse(markup: &str) -> Result<Self> {
        let html = Html::parse_document(markup);
        let body = html
            .root_element()
            .children()
            .find(|n| n.value().as_element().is_some_and(|e| e.name() == "body"))
            .map(|n| n.id())
            .ok_or_else(|| Error::parse("document has no body element"))?;
        if !html.errors.is_empty() {
            tracing::trace!(errors = html.errors.len(), "html5ever recovered from parse errors");
        }
        Ok(Self { html, body })
    }

    fn content_root(&self) -> NodeId {
        self.body
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.html
            .tree
            .get(node)?
            .parent()
            .filter(|p| p.value().is_element())
            .map(|p| p.id())
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.html.tree.get(node).map_or_else(Vec::new, |n| {
            n.children()
                .filter(|c| c.value().is_element())
                .map(|c| c.id())
                .collect()
        })
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.html.tree.get(node)?.value().as_element().map(|e| e.name())
    }

    fn attributes(&self, node: NodeId) -> Vec<(&str, &str)> {
        self.html
            .tree
            .get(node)
            .and_then(|n| n.value().as_element())
            .map_or_else(Vec::new, |e| e.attrs().collect())
    }

    fn select(&self, node: NodeId, selector: &str) -> Result<Vec<NodeId>> {
        let parsed = Selector::parse(selector).map_err(|e| Error::Selector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;
        Ok(self
            .element(node)
            .map_or_else(Vec::new, |e| e.select(&parsed).map(|m| m.id()).collect()))
    }

    fn outer_html(&self, node: NodeId) -> Result<String> {
        let handle = self
            .html
            .tree
            .get(node)
            .ok_or_else(|| Error::Serialize(format!("node {node:?} is not in this document")))?;
        match handle.value() {
            Node::Element(_) => Ok(self.require_element(node)?.html()),
            Node::Text(text) => Ok(escape_text(text)),
            Node::Comment(comment) => Ok(format!("<!--{}-->", &**comment)),
            _ => Err(Error::Serialize(format!(
                "node {node:?} has no markup representation"
            ))),
        }
    }

    fn inner_html(&self, node: NodeId) -> Result<String> {
        Ok(self.require_element(node)?.inner_html())
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_lands_in_body() {
        let doc = HtmlDocument::parse("<div id=\"a\">hi</div>").unwrap();
        assert_eq!(doc.tag_name(doc.content_root()), Some("body"));
        let kids = doc.children(doc.content_root());
        assert_eq!(kids.len(), 1);
        assert_eq!(doc.outer_html(kids[0]).unwrap(), "<div id=\"a\">hi</div>");
    }

    #[test]
    fn test_parent_stops_at_html() {
        let doc = HtmlDocument::parse("<p>x</p>").unwrap();
        let html = doc.parent(doc.content_root()).unwrap();
        assert_eq!(doc.tag_name(html), Some("html"));
        assert_eq!(doc.parent(html), None);
    }

    #[test]
    fn test_attributes_keep_source_order() {
        let doc = HtmlDocument::parse("<a z=\"1\" b=\"2\" m=\"3\"></a>").unwrap();
        let a = doc.children(doc.content_root())[0];
        assert_eq!(doc.attributes(a), vec![("z", "1"), ("b", "2"), ("m", "3")]);
        assert_eq!(doc.attribute(a, "b"), Some("2"));
    }

    #[test]
    fn test_recovered_errors_are_kept() {
        let clean = HtmlDocument::parse("<!DOCTYPE html><p>x</p>").unwrap();
        let broken = HtmlDocument::parse("<!DOCTYPE html><p>x</b></p>").unwrap();
        assert!(broken.recovered_errors().count() > clean.recovered_errors().count());
        // Recovery still yields a usable tree.
        assert_eq!(broken.as_html().root_element().value().name(), "html");
        let p = broken.children(broken.content_root())[0];
        assert_eq!(broken.outer_html(p).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_select_excludes_self() {
        let doc = HtmlDocument::parse("<div><div>inner</div></div>").unwrap();
        let outer = doc.children(doc.content_root())[0];
        let found = doc.select(outer, "div").unwrap();
        assert_eq!(found.len(), 1);
        assert_ne!(found[0], outer);
    }

    #[test]
    fn test_invalid_selector() {
        let doc = HtmlDocument::parse("<p></p>").unwrap();
        let err = doc.select(doc.content_root(), "p[").unwrap_err();
        assert!(matches!(err, Error::Selector { .. }));
    }

    #[test]
    fn test_inner_html() {
        let doc = HtmlDocument::parse("<p>a <b>b</b></p>").unwrap();
        let p = doc.children(doc.content_root())[0];
        assert_eq!(doc.inner_html(p).unwrap(), "a <b>b</b>");
    }
}
