//! `@param` tag body parsing.
//!
//! A tag body has no delimiters other than whitespace, and both the type
//! and the variable name are optional:
//!
//! ```text
//! int $count The number of items.
//! ...$items  the remaining items
//! $flag
//! string ...$parts
//! ```
//!
//! So the fields are told apart by position and shape alone:
//!
//!   1. The body is split into at most three content fragments, keeping
//!      the whitespace runs between them as fragments of their own.
//!   2. The first fragment is the type unless it starts with `$`.
//!   3. The next fragment is the variable if it starts with `$` or `...$`.
//!   4. Everything left over, spacing included, is the description.
//!
//! A body like `description only` therefore reads `description` as a type.
//! That is a known limitation of the positional rules and is kept as is.

use crate::config::{ParserConfig, WhitespaceMode};
use crate::error::TagError;
use crate::types::{ParamTag, TypeContext};

use super::description::DescriptionFactory;
use super::resolver::TypeResolver;

/// Leading character of a variable reference.
const NAME_SIGIL: char = '$';

/// Prefix of a variadic parameter (`...$args`).
const VARIADIC_MARKER: &str = "...";

/// Content fragments split off before the remainder is kept whole.
const MAX_SPLITS: usize = 2;

/// Parser for `@param` tag bodies.
///
/// Holds only its configuration, so one instance can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct ParamTagParser {
    config: ParserConfig,
}

impl ParamTagParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `body` (the text after `@param`) into a [`ParamTag`].
    ///
    /// Fails with [`TagError::InvalidArgument`] before doing any work when
    /// the body is blank or a required collaborator is missing.  Errors
    /// returned by the collaborators are passed through untouched.
    pub fn parse(
        &self,
        body: &str,
        type_resolver: Option<&dyn TypeResolver>,
        description_factory: Option<&dyn DescriptionFactory>,
        context: Option<&TypeContext>,
    ) -> Result<ParamTag, TagError> {
        if body.trim().is_empty() {
            return Err(TagError::InvalidArgument("tag body must not be empty"));
        }
        if self.config.require_type_resolver && type_resolver.is_none() {
            return Err(TagError::InvalidArgument("type resolver required"));
        }
        let Some(description_factory) = description_factory else {
            return Err(TagError::InvalidArgument("description factory required"));
        };

        tracing::trace!(body, "parsing @param tag body");

        let fragments = split_fragments(body, self.config.whitespace);
        let mut next = 0;

        // If the first fragment is not a variable, it is a type.
        let mut declared_type = None;
        if let Some(token) = fragments.first().filter(|t| !t.is_empty())
            && !token.starts_with(NAME_SIGIL)
        {
            let Some(resolver) = type_resolver else {
                tracing::debug!(token, "type token found but no type resolver was supplied");
                return Err(TagError::InvalidArgument("type resolver required"));
            };
            declared_type = Some(resolver.resolve(token, context)?);
            // The type and the whitespace after it.
            next += 2;
        }

        // If the next fragment starts with `$` or `...$`, it is the variable.
        let mut variable_name = None;
        let mut is_variadic = false;
        if let Some(token) = fragments.get(next).filter(|t| !t.is_empty())
            && (token.starts_with(NAME_SIGIL) || is_variadic_variable(token))
        {
            let (name, variadic) = strip_variable_token(token);
            variable_name = Some(name.to_string());
            is_variadic = variadic;
            next += 2;
        }

        let remainder = fragments.get(next..).unwrap_or_default().concat();
        let description = description_factory.create(&remainder, context)?;

        tracing::debug!(
            declared_type = ?declared_type,
            variable_name = ?variable_name,
            is_variadic,
            "parsed @param tag"
        );

        Ok(ParamTag::new(variable_name, declared_type, is_variadic, description))
    }
}

/// Parse `body` with the default [`ParserConfig`].
pub fn parse_param_tag(
    body: &str,
    type_resolver: Option<&dyn TypeResolver>,
    description_factory: Option<&dyn DescriptionFactory>,
    context: Option<&TypeContext>,
) -> Result<ParamTag, TagError> {
    ParamTagParser::default().parse(body, type_resolver, description_factory, context)
}

/// Render a tag back into body form.
///
/// Same as [`ParamTag::render`]; provided next to [`parse_param_tag`] for
/// symmetry.
pub fn render_param_tag(tag: &ParamTag) -> String {
    tag.render()
}

fn is_variadic_variable(token: &str) -> bool {
    token.strip_prefix(VARIADIC_MARKER).is_some_and(|rest| rest.starts_with(NAME_SIGIL))
}

/// Drop the variadic marker first, then the sigil.
///
/// - `"$x"`     → `("x", false)`
/// - `"...$x"`  → `("x", true)`
/// - `"...$"`   → `("", true)`
fn strip_variable_token(token: &str) -> (&str, bool) {
    let (rest, variadic) = match token.strip_prefix(VARIADIC_MARKER) {
        Some(rest) => (rest, true),
        None => (token, false),
    };
    (rest.strip_prefix(NAME_SIGIL).unwrap_or(rest), variadic)
}

/// Split `body` on whitespace runs, at most [`MAX_SPLITS`] times, keeping
/// each run as its own fragment.
///
/// Content and whitespace fragments alternate; the last fragment is the
/// untouched remainder.
///
/// - `"int $x  some text"` → `["int", " ", "$x", "  ", "some text"]`
/// - `"int "`              → `["int", " ", ""]`
/// - `"  $x"`              → `["", "  ", "$x"]`
fn split_fragments(body: &str, whitespace: WhitespaceMode) -> Vec<&str> {
    let is_ws = |c: char| whitespace.is_whitespace(c);

    let mut fragments = Vec::with_capacity(MAX_SPLITS * 2 + 1);
    let mut rest = body;
    for _ in 0..MAX_SPLITS {
        let Some(start) = rest.find(is_ws) else {
            break;
        };
        let run = &rest[start..];
        let len = run.find(|c: char| !is_ws(c)).unwrap_or(run.len());
        fragments.push(&rest[..start]);
        fragments.push(&run[..len]);
        rest = &run[len..];
    }
    fragments.push(rest);
    fragments
}
