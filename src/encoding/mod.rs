//! Input decoding for markup read from files or stdin.
//!
//! Markup must be UTF-8 text before a backend can parse it. Bytes are decoded
//! in this order:
//!
//! 1. A byte order mark, if present, decides the encoding and is stripped.
//! 2. Otherwise the first [`PRESCAN_LIMIT`] bytes are scanned for a
//!    `<meta charset=...>` or `<meta http-equiv=... content="...charset=...">`
//!    declaration.
//! 3. Otherwise the input must be valid UTF-8.
//!
//! Transcoding goes through `encoding_rs`, so every label the WHATWG Encoding
//! Standard knows is accepted.

use encoding_rs::{Encoding, UTF_8};

use crate::error::{Error, Result};

/// How many leading bytes are searched for a charset declaration.
pub const PRESCAN_LIMIT: usize = 1024;

/// Decodes raw markup bytes to a UTF-8 string.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if a declared charset is unknown or the bytes
/// are malformed for the chosen encoding.
///
/// # Examples
///
/// ```
/// use domwalk::encoding::decode_markup;
///
/// assert_eq!(decode_markup(b"\xEF\xBB\xBF<p>x</p>").unwrap(), "<p>x</p>");
///
/// let latin1 = b"<meta charset=\"iso-8859-1\"><p>caf\xE9</p>";
/// assert!(decode_markup(latin1).unwrap().contains("caf\u{e9}"));
/// ```
pub fn decode_markup(bytes: &[u8]) -> Result<String> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        tracing::debug!(encoding = encoding.name(), "decoding by byte order mark");
        return transcode(&bytes[bom_len..], encoding);
    }

    if let Some(label) = prescan_charset(bytes) {
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| Error::Encoding(format!("unsupported charset '{label}'")))?;
        tracing::debug!(encoding = encoding.name(), "decoding by meta charset");
        return transcode(bytes, encoding);
    }

    transcode(bytes, UTF_8)
}

fn transcode(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(Error::Encoding(format!(
            "malformed byte sequence for encoding {}",
            encoding.name()
        )));
    }
    Ok(text.into_owned())
}

/// Looks for a charset label in the leading bytes.
///
/// The search is a plain ASCII scan, not a tag parser: it finds `charset=`
/// inside the first `<meta` tag that declares one.
fn prescan_charset(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(PRESCAN_LIMIT)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    let mut rest = head.as_str();
    while let Some(meta) = rest.find("<meta") {
        let tag = &rest[meta..];
        let tag = &tag[..tag.find('>').unwrap_or(tag.len())];
        if let Some(label) = charset_in(tag) {
            return Some(label);
        }
        rest = &rest[meta + 5..];
    }
    None
}

fn charset_in(tag: &str) -> Option<String> {
    let after = &tag[tag.find("charset")? + "charset".len()..];
    let after = after.trim_start().strip_prefix('=')?.trim_start();
    let after = after.trim_start_matches(['"', '\'']);
    let label: String = after
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        .collect();
    (!label.is_empty()).then_some(label)
}
