//! Data types produced and consumed by the `@param` tag parser.
//!
//! This module contains the parsed tag itself ([`ParamTag`]) and the
//! values the two collaborators hand back to it: [`TypeExpression`] from a
//! type resolver and [`Description`] from a description factory.  The
//! lexical [`TypeContext`] passed to both collaborators lives here too.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed `@param` tag.
///
/// Built once by [`ParamTagParser::parse`](crate::docblock::ParamTagParser::parse)
/// and never modified afterwards; all fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamTag {
    variable_name: Option<String>,
    declared_type: Option<TypeExpression>,
    is_variadic: bool,
    description: Description,
}

impl ParamTag {
    pub(crate) fn new(
        variable_name: Option<String>,
        declared_type: Option<TypeExpression>,
        is_variadic: bool,
        description: Description,
    ) -> Self {
        Self { variable_name, declared_type, is_variadic, description }
    }

    /// The parameter name WITHOUT the `$` sigil and `...` marker
    /// (e.g. `"items"` for `...$items`).
    ///
    /// `None` when the tag body had no variable token.
    pub fn variable_name(&self) -> Option<&str> {
        self.variable_name.as_deref()
    }

    /// The declared type, or `None` if the body had no leading type token.
    pub fn declared_type(&self) -> Option<&TypeExpression> {
        self.declared_type.as_ref()
    }

    /// Whether the variable token carried the `...` marker.
    pub fn is_variadic(&self) -> bool {
        self.is_variadic
    }

    /// The free-text description.  Always present; may be empty.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Rebuild the tag body as it would appear after `@param`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParamTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut needs_space = false;

        if let Some(ty) = &self.declared_type {
            write!(f, "{ty}")?;
            needs_space = true;
        }

        if let Some(name) = &self.variable_name {
            if needs_space {
                f.write_str(" ")?;
            }
            if self.is_variadic {
                f.write_str("...")?;
            }
            write!(f, "${name}")?;
            needs_space = true;
        }

        if !self.description.is_empty() {
            if needs_space {
                f.write_str(" ")?;
            }
            write!(f, "{}", self.description)?;
        }

        Ok(())
    }
}

/// A resolved PHPDoc type.
///
/// The [`Display`](fmt::Display) form never contains whitespace, so a
/// rendered type always survives being re-split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeExpression {
    /// A built-in PHPDoc keyword, lowercased (e.g. `int`, `mixed`,
    /// `class-string`).
    Keyword(String),
    /// A class-like name, fully qualified, without the leading `\`.
    Class(String),
    /// A literal value used as a type (`'foo'`, `42`).
    Literal(String),
    /// `?T`
    Nullable(Box<TypeExpression>),
    /// `T[]`
    Array(Box<TypeExpression>),
    /// `Base<A, B>`
    Generic { base: Box<TypeExpression>, params: Vec<TypeExpression> },
    /// `array{id: int, name?: string}`
    Shape { base: Box<TypeExpression>, entries: Vec<ShapeEntry> },
    /// `A|B`
    Union(Vec<TypeExpression>),
    /// `A&B`
    Intersection(Vec<TypeExpression>),
}

impl TypeExpression {
    /// Whether rendering this type as the operand of a postfix or prefix
    /// operator (`[]`, `?`) needs parentheses.
    fn is_compound(&self) -> bool {
        matches!(
            self,
            TypeExpression::Union(_) | TypeExpression::Intersection(_) | TypeExpression::Nullable(_)
        )
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compound() { write!(f, "({self})") } else { write!(f, "{self}") }
    }
}

impl fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpression::Keyword(name) => f.write_str(name),
            TypeExpression::Class(fqn) => write!(f, "\\{fqn}"),
            TypeExpression::Literal(value) => f.write_str(value),
            TypeExpression::Nullable(inner) => {
                f.write_str("?")?;
                inner.fmt_operand(f)
            }
            TypeExpression::Array(inner) => {
                inner.fmt_operand(f)?;
                f.write_str("[]")
            }
            TypeExpression::Generic { base, params } => {
                write!(f, "{base}<")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{param}")?;
                }
                f.write_str(">")
            }
            TypeExpression::Shape { base, entries } => {
                write!(f, "{base}{{")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{entry}")?;
                }
                f.write_str("}")
            }
            TypeExpression::Union(members) => fmt_joined(f, members, "|"),
            TypeExpression::Intersection(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str("&")?;
                    }
                    // `A&(B|C)` needs the grouping back.
                    member.fmt_operand(f)?;
                }
                Ok(())
            }
        }
    }
}

fn fmt_joined(f: &mut fmt::Formatter<'_>, members: &[TypeExpression], sep: &str) -> fmt::Result {
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{member}")?;
    }
    Ok(())
}

/// One entry of an array or object shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeEntry {
    /// `None` for positional entries (`array{int, string}`).
    pub key: Option<String>,
    /// `true` for `key?: type`.
    pub optional: bool,
    pub value: TypeExpression,
}

impl fmt::Display for ShapeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(key) = &self.key {
            f.write_str(key)?;
            if self.optional {
                f.write_str("?")?;
            }
            f.write_str(":")?;
        }
        write!(f, "{}", self.value)
    }
}

/// An inline tag found inside a description, e.g. `{@see Foo::bar()}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineTag {
    /// Tag name without the `@` (e.g. `"see"`, `"link"`).
    pub name: String,
    /// Everything after the name up to the closing brace, trimmed.
    pub body: String,
}

/// The free-text part of a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    text: String,
    inline_tags: Vec<InlineTag>,
}

impl Description {
    pub fn new(text: impl Into<String>, inline_tags: Vec<InlineTag>) -> Self {
        Self { text: text.into(), inline_tags }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Inline tags in the order they appear in the text.
    pub fn inline_tags(&self) -> &[InlineTag] {
        &self.inline_tags
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lexical context used to resolve relative class names: the current
/// namespace and the `use` imports in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeContext {
    namespace: String,
    /// Lowercased alias → fully-qualified name (no leading `\`).
    aliases: HashMap<String, String>,
}

impl TypeContext {
    /// Create a context for `namespace` (empty string for the global
    /// namespace).  A leading `\` is ignored.
    pub fn new(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let namespace = namespace.trim_start_matches('\\').to_string();
        Self { namespace, aliases: HashMap::new() }
    }

    /// Register a `use` import.  `alias` is the short name visible in the
    /// file (`Bar` for `use Foo\Bar;`, `Baz` for `use Foo\Bar as Baz;`).
    pub fn with_alias(mut self, alias: &str, fqn: &str) -> Self {
        self.add_alias(alias, fqn);
        self
    }

    pub fn add_alias(&mut self, alias: &str, fqn: &str) {
        let fqn = fqn.trim_start_matches('\\');
        self.aliases.insert(alias.to_ascii_lowercase(), fqn.to_string());
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Look up an import by its short name (case-insensitive).
    pub fn alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(&alias.to_ascii_lowercase()).map(String::as_str)
    }
}
