//! Markup serialization helpers.
//!
//! Two things live here:
//!
//! - [`flatten`], the whitespace normalization applied to every serialized
//!   string the crate compares or returns. Serialization-equivalence between
//!   nodes is defined on flattened markup.
//! - The writer behind the in-memory [`Document`]'s `outer_html` and
//!   `inner_html`. Its escaping follows the HTML fragment serialization
//!   algorithm, so both backends render the same tree to the same text.

use crate::tree::reader::{is_raw_text_element, is_void_element};
use crate::tree::{Document, NodeId, NodeKind};

/// Collapses markup onto a single line.
///
/// Each line is trimmed of leading and trailing whitespace and the lines are
/// joined with nothing in between. Indentation and line breaks introduced by
/// pretty-printed source therefore disappear, while whitespace inside a line
/// is kept as written.
///
/// ```
/// use domwalk::serial::flatten;
///
/// let markup = "<div>\n    <p>a b</p>\n</div>\n";
/// assert_eq!(flatten(markup), "<div><p>a b</p></div>");
/// ```
#[must_use]
pub fn flatten(markup: &str) -> String {
    markup.lines().map(str::trim).collect()
}

/// Writes a node and its subtree as HTML.
pub(crate) fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match &doc.node(id).kind {
        NodeKind::Element { name, attributes } => {
            out.push('<');
            out.push_str(name);
            for attr in attributes {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                write_escaped_attr(out, &attr.value);
                out.push('"');
            }
            out.push('>');

            if is_void_element(name) {
                return;
            }

            let raw = is_raw_text_element(name);
            for child in doc.child_nodes(id) {
                match &doc.node(child).kind {
                    NodeKind::Text { content } if raw => out.push_str(content),
                    _ => write_node(doc, child, out),
                }
            }

            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        NodeKind::Text { content } => write_escaped_text(out, content),
        NodeKind::Comment { content } => {
            out.push_str("<!--");
            out.push_str(content);
            out.push_str("-->");
        }
        NodeKind::Document => {
            for child in doc.child_nodes(id) {
                write_node(doc, child, out);
            }
        }
    }
}

fn write_escaped_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn write_escaped_attr(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
