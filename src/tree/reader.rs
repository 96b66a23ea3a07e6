//! Tolerant markup reader for the in-memory [`Document`].
//!
//! This is not an HTML5 tree builder. It reads the markup that structural
//! queries are usually fed: elements, attributes, text and comments. It is
//! forgiving in the usual HTML ways:
//!
//! - tag and attribute names are case-insensitive (stored lowercase)
//! - attribute values may be double-quoted, single-quoted, unquoted, or absent
//! - void elements (`<br>`, `<img>`, ...) never take children
//! - unmatched end tags are ignored; unclosed elements close at end of input
//! - `<html>`, `<head>` and `<body>` tags are implied; content always lands
//!   under the document's `body`
//!
//! Input that cannot be read unambiguously is rejected with
//! [`Error::Parse`]: an unterminated tag, comment or quoted attribute value,
//! or nesting deeper than [`ReadOptions::max_depth`].

use super::{Attribute, Document, NodeId, NodeKind};
use crate::error::{Error, Result};

/// Default maximum element nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling the reader.
///
/// ```
/// use domwalk::tree::ReadOptions;
///
/// let opts = ReadOptions::default().max_depth(32).keep_comments(false);
/// assert_eq!(opts.max_depth, 32);
/// ```
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Maximum element nesting depth below `body`.
    pub max_depth: usize,
    /// Whether comments become nodes in the tree (they never match queries).
    pub keep_comments: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            keep_comments: true,
        }
    }
}

impl ReadOptions {
    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enables or disables keeping comment nodes.
    #[must_use]
    pub fn keep_comments(mut self, yes: bool) -> Self {
        self.keep_comments = yes;
        self
    }
}

/// Returns `true` for elements that never have content or an end tag.
pub(crate) fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Returns `true` for elements whose content is read verbatim.
pub(crate) fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

fn is_implied(tag: &str) -> bool {
    matches!(tag, "html" | "head" | "body")
}

/// Reads `input` into a fresh document.
///
/// # Errors
///
/// See the module documentation.
pub fn read(input: &str, options: &ReadOptions) -> Result<Document> {
    let mut reader = Reader {
        input,
        pos: 0,
        doc: Document::new(),
        stack: Vec::new(),
        options,
    };
    reader.run()?;
    Ok(reader.doc)
}

struct Reader<'a> {
    input: &'a str,
    pos: usize,
    doc: Document,
    /// Open elements below `body`.
    stack: Vec<NodeId>,
    options: &'a ReadOptions,
}

impl<'a> Reader<'a> {
    fn run(&mut self) -> Result<()> {
        let input = self.input.strip_prefix('\u{FEFF}').unwrap_or(self.input);
        self.pos = self.input.len() - input.len();

        while self.pos < self.input.len() {
            let rest = self.rest();
            if rest.starts_with("<!--") {
                self.read_comment()?;
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                self.skip_declaration()?;
            } else if rest.starts_with("</") && next_is_name_start(&rest[2..]) {
                self.read_end_tag()?;
            } else if rest.starts_with('<') && next_is_name_start(&rest[1..]) {
                self.read_start_tag()?;
            } else {
                self.read_text();
            }
        }
        Ok(())
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn current_parent(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(self.doc.body)
    }

    fn append(&mut self, node: NodeId) {
        let parent = self.current_parent();
        self.doc.append_child(parent, node);
    }

    fn read_comment(&mut self) -> Result<()> {
        let start = self.pos;
        let body = &self.rest()[4..];
        let end = body
            .find("-->")
            .ok_or_else(|| Error::parse_at("unterminated comment", start))?;
        let content = &body[..end];
        self.pos += 4 + end + 3;
        if self.options.keep_comments {
            let node = self.doc.create_comment(content);
            self.append(node);
        }
        Ok(())
    }

    fn skip_declaration(&mut self) -> Result<()> {
        let start = self.pos;
        let end = self
            .rest()
            .find('>')
            .ok_or_else(|| Error::parse_at("unterminated declaration", start))?;
        self.pos += end + 1;
        Ok(())
    }

    fn read_text(&mut self) {
        let rest = self.rest();
        // A lone '<' that does not open markup is literal text.
        let skip = usize::from(rest.starts_with('<'));
        let end = rest[skip..].find('<').map_or(rest.len(), |i| i + skip);
        let text = decode_entities(&rest[..end]);
        self.pos += end;
        self.push_text(&text);
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let parent = self.current_parent();
        // Merge with a preceding text node so "a<b" stays one node.
        if let Some(last) = self.doc.node(parent).last_child {
            if let NodeKind::Text { content } = &mut self.doc.node_mut(last).kind {
                content.push_str(text);
                return;
            }
        }
        let node = self.doc.create_text(text);
        self.append(node);
    }

    fn read_start_tag(&mut self) -> Result<()> {
        let start = self.pos;
        self.pos += 1;
        let name = self.read_name();
        let (attributes, self_closing) = self.read_attributes(start)?;

        if is_implied(&name) {
            return Ok(());
        }

        let node = self.doc.create_element(&name);
        for attr in attributes {
            // First occurrence wins, as in HTML.
            if self.doc.attribute_index(node, &attr.name).is_none() {
                self.doc.set_attribute(node, &attr.name, &attr.value);
            }
        }
        self.append(node);

        if self_closing || is_void_element(&name) {
            return Ok(());
        }
        if self.stack.len() >= self.options.max_depth {
            return Err(Error::parse_at(
                format!("maximum nesting depth {} exceeded", self.options.max_depth),
                start,
            ));
        }
        self.stack.push(node);

        if is_raw_text_element(&name) {
            self.read_raw_text(&name);
        }
        Ok(())
    }

    fn read_raw_text(&mut self, name: &str) {
        let close = format!("</{name}");
        let rest = self.rest();
        let end = find_ascii_case_insensitive(rest, &close).unwrap_or(rest.len());
        let content = rest[..end].to_string();
        self.pos += end;
        if !content.is_empty() {
            let node = self.doc.create_text(&content);
            self.append(node);
        }
    }

    fn read_end_tag(&mut self) -> Result<()> {
        let start = self.pos;
        self.pos += 2;
        let name = self.read_name();
        let end = self
            .rest()
            .find('>')
            .ok_or_else(|| Error::parse_at(format!("unterminated end tag </{name}"), start))?;
        self.pos += end + 1;

        if let Some(index) = self
            .stack
            .iter()
            .rposition(|&id| self.doc.node_name(id) == Some(name.as_str()))
        {
            self.stack.truncate(index);
        }
        Ok(())
    }

    fn read_name(&mut self) -> String {
        let rest = self.rest();
        let len = rest
            .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
            .unwrap_or(rest.len());
        let name = rest[..len].to_ascii_lowercase();
        self.pos += len;
        name
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        self.pos += rest.len() - trimmed.len();
    }

    /// Reads attributes up to and including the closing `>`.
    fn read_attributes(&mut self, tag_start: usize) -> Result<(Vec<Attribute>, bool)> {
        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.is_empty() {
                return Err(Error::parse_at("unterminated start tag", tag_start));
            }
            if rest.starts_with("/>") {
                self.pos += 2;
                return Ok((attributes, true));
            }
            if rest.starts_with('>') {
                self.pos += 1;
                return Ok((attributes, false));
            }
            if rest.starts_with('/') {
                self.pos += 1;
                continue;
            }

            let len = rest
                .find(|c: char| c.is_ascii_whitespace() || matches!(c, '=' | '>' | '/'))
                .unwrap_or(rest.len());
            let name = rest[..len].to_ascii_lowercase();
            self.pos += len;
            self.skip_whitespace();

            let value = if self.rest().starts_with('=') {
                self.pos += 1;
                self.skip_whitespace();
                self.read_attribute_value()?
            } else {
                String::new()
            };
            attributes.push(Attribute::new(name, value));
        }
    }

    fn read_attribute_value(&mut self) -> Result<String> {
        let start = self.pos;
        let rest = self.rest();
        match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &rest[1..];
                let end = body
                    .find(quote)
                    .ok_or_else(|| Error::parse_at("unterminated attribute value", start))?;
                let value = decode_entities(&body[..end]);
                self.pos += end + 2;
                Ok(value)
            }
            _ => {
                let len = rest
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .unwrap_or(rest.len());
                let value = decode_entities(&rest[..len]);
                self.pos += len;
                Ok(value)
            }
        }
    }
}

impl Document {
    fn attribute_index(&self, id: NodeId, name: &str) -> Option<usize> {
        self.element_attributes(id)
            .iter()
            .position(|a| a.name == name)
    }
}

fn next_is_name_start(s: &str) -> bool {
    s.starts_with(|c: char| c.is_ascii_alphabetic())
}

fn find_ascii_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len()).find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

/// Resolves the common named references and numeric character references.
///
/// Unknown or malformed references are kept literally, matching how browsers
/// treat a bare `&`.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .find(';')
            .filter(|&semi| semi <= 12)
            .and_then(|semi| decode_reference(&rest[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(reference: &str) -> Option<char> {
    if let Some(num) = reference.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }
    Some(match reference {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => return None,
    })
}
