//! `@param` tag extraction from whole docblocks.
//!
//! This is a thin convenience over [`ParamTagParser`]: it finds the
//! `@param` lines of a `/** ... */` comment, joins continuation lines onto
//! the tag they belong to, and parses each body.

use crate::error::TagError;
use crate::types::{ParamTag, TypeContext};
use crate::util::{docblock_inner, docblock_line};

use super::description::DescriptionFactory;
use super::param::ParamTagParser;
use super::resolver::TypeResolver;

/// Tag names sharing the `@param` body syntax.  Longest first so that
/// `@phpstan-param` is not mistaken for something shorter.
const PARAM_TAGS: &[&str] = &["@phpstan-param", "@psalm-param", "@param"];

/// Parse every `@param` tag in `docblock`.
///
/// Handles:
///   - single-line docblocks: `/** @param int $x */`
///   - multi-line docblocks with a `*` gutter
///   - descriptions continued on following lines (joined with `\n`)
///   - the `@phpstan-param` / `@psalm-param` variants
///
/// A bare `@param` takes its body from the following line; one with no
/// body at all is skipped.  Any other parse
/// error is returned.
pub fn extract_param_tags(
    docblock: &str,
    parser: &ParamTagParser,
    type_resolver: Option<&dyn TypeResolver>,
    description_factory: Option<&dyn DescriptionFactory>,
    context: Option<&TypeContext>,
) -> Result<Vec<ParamTag>, TagError> {
    let mut results = Vec::new();

    for body in param_tag_bodies(docblock) {
        if body.trim().is_empty() {
            tracing::debug!("skipping @param tag without a body");
            continue;
        }
        results.push(parser.parse(&body, type_resolver, description_factory, context)?);
    }

    Ok(results)
}

/// Collect the raw bodies of all `@param`-style tags, continuation lines
/// included.
fn param_tag_bodies(docblock: &str) -> Vec<String> {
    let mut bodies: Vec<String> = Vec::new();
    // Whether the previous tag line was a `@param` tag still collecting
    // continuation lines.
    let mut collecting = false;

    for line in docblock_inner(docblock).lines() {
        let trimmed = docblock_line(line);

        if trimmed.starts_with('@') {
            collecting = false;
            if let Some(body) = strip_param_tag(trimmed) {
                bodies.push(body.to_string());
                collecting = true;
            }
            continue;
        }

        // A blank line ends the description.
        if trimmed.is_empty() {
            collecting = false;
            continue;
        }

        if collecting && let Some(body) = bodies.last_mut() {
            // A bare `@param` takes its body from the next line.
            if !body.is_empty() {
                body.push('\n');
            }
            body.push_str(trimmed);
        }
    }

    bodies
}

/// If `line` starts with a `@param`-style tag followed by whitespace (or
/// nothing), return the rest of the line.
fn strip_param_tag(line: &str) -> Option<&str> {
    PARAM_TAGS.iter().find_map(|tag| {
        let rest = line.strip_prefix(tag)?;
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            Some(rest.trim())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_from_multiline_docblock() {
        let doc = "/**\n * Summary.\n *\n * @param int $a First.\n * @param string $b\n *   continued\n * @return void\n */";
        assert_eq!(param_tag_bodies(doc), vec!["int $a First.", "string $b\ncontinued"]);
    }

    #[test]
    fn param_out_is_not_param() {
        assert_eq!(strip_param_tag("@param-out int $x"), None);
        assert_eq!(strip_param_tag("@param int $x"), Some("int $x"));
        assert_eq!(strip_param_tag("@psalm-param list<int> $x"), Some("list<int> $x"));
        assert_eq!(strip_param_tag("@param"), Some(""));
    }

    #[test]
    fn body_starting_on_the_next_line() {
        let doc = "/**\n * @param\n *   int $x The x.\n *   More.\n */";
        assert_eq!(param_tag_bodies(doc), vec!["int $x The x.\nMore."]);
    }
}
