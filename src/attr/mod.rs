//! Attribute access on selections.
//!
//! Lookups read the *first* node of a selection, except
//! [`attribute_string`](Selection::attribute_string), which walks every node.
//! Multi-part attribute values are split on single ASCII spaces, exactly:
//! `"a  b"` has three parts, the middle one empty.

use crate::dom::Dom;
use crate::error::{Error, Result};
use crate::selection::{Parsed, Selection};

impl<'a, D: Dom> Selection<'a, D> {
    /// Renders the attributes of every selected node as `name="value"` pairs,
    /// space-joined in encounter order, skipping names in `exclude`.
    ///
    /// Values are emitted exactly as stored; nothing is escaped. This is the
    /// form used to carry attributes across a tag rename.
    ///
    /// ```
    /// use domwalk::{HtmlDocument, Parsed};
    ///
    /// let parsed = Parsed::<HtmlDocument>::parse(r#"<a id="x" class="c" href="/">t</a>"#).unwrap();
    /// let a = parsed.top_level();
    /// assert_eq!(a.attribute_string(&["class"]), r#"id="x" href="/""#);
    /// ```
    pub fn attribute_string(&self, exclude: &[&str]) -> String {
        self.nodes()
            .iter()
            .flat_map(|&node| self.document().attributes(node))
            .filter(|(name, _)| !exclude.contains(name))
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The value of `name` on the first node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] if the attribute is absent (or the
    /// selection is empty).
    pub fn attr(&self, name: &str) -> Result<&'a str> {
        self.attr_opt(name).ok_or_else(|| Error::MissingAttribute {
            name: name.to_string(),
            element: None,
        })
    }

    /// The value of `name` on the first node, if present.
    pub fn attr_opt(&self, name: &str) -> Option<&'a str> {
        let doc = self.document();
        self.first_node().and_then(|node| doc.attribute(node, name))
    }

    /// The space-separated part of `name` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] if the attribute is absent and
    /// [`Error::MalformedAttribute`] if the value has fewer than `index + 1`
    /// parts.
    pub fn attr_part(&self, name: &str, index: usize) -> Result<&'a str> {
        let value = self.attr(name)?;
        let parts: Vec<&str> = value.split(' ').collect();
        parts
            .get(index)
            .copied()
            .ok_or_else(|| Error::MalformedAttribute {
                name: name.to_string(),
                index,
                found: parts.len(),
            })
    }

    /// Returns `true` if the first node carries at least one of `names`.
    pub fn has_any_attr(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.attr_opt(name).is_some())
    }

    /// The first of `names`, in the order given, present on the first node.
    pub fn first_present_attr<'n>(&self, names: &[&'n str]) -> Option<&'n str> {
        names
            .iter()
            .copied()
            .find(|name| self.attr_opt(name).is_some())
    }

    /// Like [`attr`](Self::attr), but the error names the offending element
    /// by its full flattened markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] with `element` set, or
    /// [`Error::Serialize`] if the element cannot be rendered for the message.
    pub fn require_attr(&self, name: &str) -> Result<&'a str> {
        match self.attr_opt(name) {
            Some(value) => Ok(value),
            None => Err(Error::MissingAttribute {
                name: name.to_string(),
                element: Some(self.html()?),
            }),
        }
    }

    /// Requires `name` to be present and to split into exactly `expected`
    /// space-separated parts, and returns them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] as [`require_attr`](Self::require_attr)
    /// does, or [`Error::AttributeArity`] when the part count differs.
    pub fn require_attr_parts(&self, name: &str, expected: usize) -> Result<Vec<&'a str>> {
        let value = self.require_attr(name)?;
        let parts: Vec<&str> = value.split(' ').collect();
        if parts.len() != expected {
            return Err(Error::AttributeArity {
                name: name.to_string(),
                expected,
                found: parts.len(),
                element: Some(self.html()?),
            });
        }
        Ok(parts)
    }
}

/// Parses `markup` and reads `name` from its first top-level element.
///
/// Returns `Ok(None)` when the attribute (or any element) is absent.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the markup cannot be parsed.
///
/// ```
/// use domwalk::attr::attr_from_markup;
/// use domwalk::tree::Document;
///
/// let id = attr_from_markup::<Document>(r#"<b id="k">x</b>"#, "id").unwrap();
/// assert_eq!(id.as_deref(), Some("k"));
/// ```
pub fn attr_from_markup<D: Dom>(markup: &str, name: &str) -> Result<Option<String>> {
    let parsed = Parsed::<D>::parse(markup)?;
    Ok(parsed.top_level().attr_opt(name).map(str::to_string))
}
