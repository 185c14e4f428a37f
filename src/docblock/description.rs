//! Description building for the free-text part of a tag.
//!
//! The parser hands whatever follows the type and variable tokens to a
//! [`DescriptionFactory`].  [`StandardDescriptionFactory`] trims the text and
//! scans it for inline tags:
//!
//!   - `{@see Foo::bar()}`, `{@link https://example.com docs}` are recorded
//!     as [`InlineTag`]s and left in the text verbatim
//!   - `{@}` is an escaped `@` and `{@*}` an escaped `*/`
//!
//! An inline tag without its closing brace is a
//! [`TagError::InvalidDescription`].

use memchr::memmem;

use crate::error::TagError;
use crate::types::{Description, InlineTag, TypeContext};

/// Builds a [`Description`] from raw tag text.
///
/// Like [`TypeResolver`](super::TypeResolver), implementations must be safe
/// to share across threads.
pub trait DescriptionFactory: Send + Sync {
    fn create(&self, text: &str, context: Option<&TypeContext>) -> Result<Description, TagError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDescriptionFactory;

impl DescriptionFactory for StandardDescriptionFactory {
    fn create(&self, text: &str, _context: Option<&TypeContext>) -> Result<Description, TagError> {
        let text = text.trim();
        let mut out = String::with_capacity(text.len());
        let mut inline_tags = Vec::new();
        let mut cursor = 0;

        for start in memmem::find_iter(text.as_bytes(), b"{@") {
            // Occurrences inside an inline tag we already consumed.
            if start < cursor {
                continue;
            }
            out.push_str(&text[cursor..start]);

            let rest = &text[start + 2..];
            if rest.starts_with('}') {
                out.push('@');
                cursor = start + 3;
                continue;
            }
            if rest.starts_with("*}") {
                out.push_str("*/");
                cursor = start + 4;
                continue;
            }

            let Some(len) = closing_brace(rest) else {
                return Err(TagError::InvalidDescription {
                    offset: start,
                    reason: "unterminated inline tag".to_string(),
                });
            };
            let end = start + 2 + len + 1;
            inline_tags.push(parse_inline_tag(&rest[..len]));
            out.push_str(&text[start..end]);
            cursor = end;
        }
        out.push_str(&text[cursor..]);

        Ok(Description::new(out, inline_tags))
    }
}

/// Byte length of the inline-tag content up to (not including) the brace
/// that closes it.  Nested `{…}` pairs inside the tag are skipped.
fn closing_brace(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' if depth == 0 => return Some(i),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Split `see Foo::bar() some text` into name and body.
fn parse_inline_tag(content: &str) -> InlineTag {
    let content = content.trim_start();
    let name_end = content.find(char::is_whitespace).unwrap_or(content.len());
    InlineTag {
        name: content[..name_end].to_string(),
        body: content[name_end..].trim().to_string(),
    }
}
