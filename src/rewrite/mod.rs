//! Tag renaming by serialize, re-wrap and re-parse.
//!
//! Nothing here mutates a document. Both operations read the selection's
//! inner markup, synthesize `<tag attrs>inner</tag>`, and parse that text
//! into a brand-new document with the same backend.

use crate::dom::Dom;
use crate::error::{Error, Result};
use crate::selection::{Parsed, Selection};

impl<D: Dom> Selection<'_, D> {
    /// Produces a new document whose top-level element is the first selected
    /// node renamed to `new_tag`, with the same children and all attributes of
    /// every selected node (see
    /// [`attribute_string`](Selection::attribute_string)).
    ///
    /// Take [`Parsed::top_level`] of the result for the renamed selection.
    ///
    /// ```
    /// use domwalk::{HtmlDocument, Parsed};
    ///
    /// let parsed = Parsed::<HtmlDocument>::parse(r#"<div id="a">hi</div>"#).unwrap();
    /// let renamed = parsed.top_level().rename_tag("section").unwrap();
    /// assert_eq!(renamed.top_level().html().unwrap(), r#"<section id="a">hi</section>"#);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an unusable tag name,
    /// [`Error::Serialize`] if the inner markup cannot be read, and
    /// [`Error::Parse`] if the synthesized markup cannot be parsed.
    pub fn rename_tag(&self, new_tag: &str) -> Result<Parsed<D>> {
        let markup = self.rewrap(new_tag, &self.attribute_string(&[]))?;
        tracing::debug!(from = ?self.tag_name(), to = new_tag, "renaming element");
        Parsed::parse(&markup)
    }

    /// Like [`rename_tag`](Self::rename_tag), but with the caller's
    /// `attribute_string` in place of the original attributes, returning the
    /// flattened markup of the result instead of a live document.
    ///
    /// An empty `attribute_string` produces a tag with no attributes.
    ///
    /// # Errors
    ///
    /// As for [`rename_tag`](Self::rename_tag).
    pub fn wrap_with_new_tag(&self, new_tag: &str, attribute_string: &str) -> Result<String> {
        let markup = self.rewrap(new_tag, attribute_string)?;
        Parsed::<D>::parse(&markup)?.top_level().html()
    }

    fn rewrap(&self, new_tag: &str, attribute_string: &str) -> Result<String> {
        validate_tag_name(new_tag)?;
        let inner = self.inner_html()?;
        Ok(if attribute_string.is_empty() {
            format!("<{new_tag}>{inner}</{new_tag}>")
        } else {
            format!("<{new_tag} {attribute_string}>{inner}</{new_tag}>")
        })
    }
}

fn validate_tag_name(tag: &str) -> Result<()> {
    let valid = tag.starts_with(|c: char| c.is_ascii_alphabetic())
        && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("'{tag}' is not a valid tag name")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::html::HtmlDocument;
    use crate::tree::Document;

    #[test]
    fn test_rename_keeps_children_and_attributes() {
        let parsed =
            Parsed::<Document>::parse(r#"<div id="a" class="x y"><p>one</p>two</div>"#).unwrap();
        let renamed = parsed.top_level().rename_tag("article").unwrap();
        assert_eq!(
            renamed.top_level().html().unwrap(),
            r#"<article id="a" class="x y"><p>one</p>two</article>"#
        );
        // The source document is untouched.
        assert_eq!(parsed.top_level().tag_name(), Some("div"));
    }

    #[test]
    fn test_rename_without_attributes() {
        let parsed = Parsed::<HtmlDocument>::parse("<b>bold</b>").unwrap();
        let renamed = parsed.top_level().rename_tag("strong").unwrap();
        assert_eq!(renamed.top_level().html().unwrap(), "<strong>bold</strong>");
    }

    #[test]
    fn test_rename_rejects_bad_tag_names() {
        let parsed = Parsed::<Document>::parse("<b>x</b>").unwrap();
        for tag in ["", "1h", "a b", "x><script", "é"] {
            let err = parsed.top_level().rename_tag(tag).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{tag}");
        }
    }

    #[test]
    fn test_rename_empty_selection_fails_to_serialize() {
        let parsed = Parsed::<Document>::parse("<b>x</b>").unwrap();
        let none = parsed.top_level().find("i").unwrap();
        assert!(matches!(none.rename_tag("i"), Err(Error::Serialize(_))));
    }

    #[test]
    fn test_rename_in_tree_backend_surfaces_parse_errors() {
        // Attribute values are carried over unescaped, so a value holding
        // quotes can leave the synthesized start tag unterminated.
        let parsed = Parsed::<Document>::parse(r#"<b t='x" y=&#39;z'>y</b>"#).unwrap();
        assert!(matches!(
            parsed.top_level().rename_tag("i"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_wrap_with_new_tag() {
        let parsed = Parsed::<HtmlDocument>::parse(r#"<div id="a"><i>x</i></div>"#).unwrap();
        let div = parsed.top_level();
        assert_eq!(
            div.wrap_with_new_tag("aside", r#"role="note""#).unwrap(),
            r#"<aside role="note"><i>x</i></aside>"#
        );
        assert_eq!(
            div.wrap_with_new_tag("aside", "").unwrap(),
            "<aside><i>x</i></aside>"
        );
    }
}
