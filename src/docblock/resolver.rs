//! Type resolution for the type position of a `@param` tag.
//!
//! The parser only decides *which* token is the type; turning that token
//! into a [`TypeExpression`] is delegated to a [`TypeResolver`].
//! [`PhpDocTypeResolver`] is the stock implementation.  It understands the
//! PHPDoc syntax that fits in a single whitespace-free token:
//!
//!   - unions and intersections: `int|string`, `A&B`, `(A|B)&C`
//!   - nullables and arrays: `?User`, `User[]`, `(int|string)[]`
//!   - generics: `array<int,User>`, `Collection<User>`, `int<0,max>`
//!   - shapes: `array{id:int,name?:string}`
//!   - literals: `'foo'`, `42`
//!   - keywords (`int`, `mixed`, `class-string`, …) and class names, the
//!     latter resolved through the [`TypeContext`]

use crate::error::TagError;
use crate::resolution::resolve_class_name;
use crate::types::{ShapeEntry, TypeContext, TypeExpression};

use super::types::{
    check_balanced, find_depth0, is_keyword, is_literal, is_range_bound, is_valid_name,
    split_depth0, split_suffix_block, strip_grouping,
};

/// Turns a raw type token into a [`TypeExpression`].
///
/// Implementations are shared service handles: they must be usable from
/// several threads at once without coordination.
pub trait TypeResolver: Send + Sync {
    fn resolve(
        &self,
        token: &str,
        context: Option<&TypeContext>,
    ) -> Result<TypeExpression, TagError>;
}

/// The stock PHPDoc type resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpDocTypeResolver;

impl TypeResolver for PhpDocTypeResolver {
    fn resolve(
        &self,
        token: &str,
        context: Option<&TypeContext>,
    ) -> Result<TypeExpression, TagError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TagError::invalid_type(token, "empty type"));
        }
        check_balanced(token).map_err(|reason| TagError::invalid_type(token, reason))?;

        let resolved = Resolver { token, context }.union(token, 0)?;
        tracing::trace!(token, resolved = %resolved, "resolved type token");
        Ok(resolved)
    }
}

/// Deepest nesting of groups, generics, shapes, `?` prefixes and `[]`
/// suffixes the resolver accepts.
const MAX_DEPTH: usize = 64;

/// One resolution run: the full token (for error messages) plus the
/// context.
struct Resolver<'a> {
    token: &'a str,
    context: Option<&'a TypeContext>,
}

/// A `?` prefix or `[]` suffix peeled off an atom.
enum Wrapper {
    Nullable,
    Array,
}

impl Resolver<'_> {
    fn error(&self, reason: impl Into<String>) -> TagError {
        TagError::invalid_type(self.token, reason)
    }

    fn descend(&self, depth: usize) -> Result<usize, TagError> {
        if depth >= MAX_DEPTH {
            return Err(self.error("type nested too deeply"));
        }
        Ok(depth + 1)
    }

    fn union(&self, s: &str, depth: usize) -> Result<TypeExpression, TagError> {
        let members = split_depth0(s, '|');
        if members.len() == 1 {
            return self.intersection(s, depth);
        }
        let members = members
            .into_iter()
            .map(|m| self.intersection(m, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TypeExpression::Union(members))
    }

    fn intersection(&self, s: &str, depth: usize) -> Result<TypeExpression, TagError> {
        let members = split_depth0(s, '&');
        if members.len() == 1 {
            return self.atom(s, depth);
        }
        let members =
            members.into_iter().map(|m| self.atom(m, depth)).collect::<Result<Vec<_>, _>>()?;
        Ok(TypeExpression::Intersection(members))
    }

    fn atom(&self, s: &str, depth: usize) -> Result<TypeExpression, TagError> {
        let mut s = s.trim();
        let mut depth = depth;
        let mut wrappers = Vec::new();
        loop {
            if let Some(inner) = s.strip_prefix('?') {
                wrappers.push(Wrapper::Nullable);
                s = inner.trim();
            } else if let Some(element) = s.strip_suffix("[]") {
                wrappers.push(Wrapper::Array);
                s = element.trim();
            } else {
                break;
            }
            depth = self.descend(depth)?;
        }

        let mut resolved = self.bare_atom(s, depth)?;
        // `?int[]` is a nullable array: the first wrapper peeled is the
        // outermost.
        for wrapper in wrappers.into_iter().rev() {
            resolved = match wrapper {
                Wrapper::Nullable => TypeExpression::Nullable(Box::new(resolved)),
                Wrapper::Array => TypeExpression::Array(Box::new(resolved)),
            };
        }
        Ok(resolved)
    }

    /// An atom without `?` prefixes or `[]` suffixes.
    fn bare_atom(&self, s: &str, depth: usize) -> Result<TypeExpression, TagError> {
        if s.is_empty() {
            return Err(self.error("empty union or intersection member"));
        }

        if let Some(inner) = strip_grouping(s) {
            return self.union(inner, self.descend(depth)?);
        }

        if is_literal(s) {
            return Ok(TypeExpression::Literal(s.to_string()));
        }

        if let Some((base, params)) = split_suffix_block(s, '<', '>') {
            let depth = self.descend(depth)?;
            let base = self.name(base)?;
            let int_range = matches!(&base, TypeExpression::Keyword(k) if k == "int");
            let params = split_depth0(params, ',')
                .into_iter()
                .map(|p| match p.trim() {
                    // `int<0,max>`, `int<min,-1>`
                    bound if int_range && is_range_bound(bound) => {
                        Ok(TypeExpression::Keyword(bound.to_ascii_lowercase()))
                    }
                    _ => self.union(p, depth),
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(TypeExpression::Generic { base: Box::new(base), params });
        }

        if let Some((base, entries)) = split_suffix_block(s, '{', '}') {
            let depth = self.descend(depth)?;
            let base = self.name(base)?;
            let entries = self.shape_entries(entries, depth)?;
            return Ok(TypeExpression::Shape { base: Box::new(base), entries });
        }

        self.name(s)
    }

    fn shape_entries(&self, s: &str, depth: usize) -> Result<Vec<ShapeEntry>, TagError> {
        if s.trim().is_empty() {
            return Ok(Vec::new());
        }
        split_depth0(s, ',')
            .into_iter()
            // Trailing comma: `array{id:int,}`.
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| {
                let Some(colon) = find_depth0(entry, ':') else {
                    return Ok(ShapeEntry {
                        key: None,
                        optional: false,
                        value: self.union(entry, depth)?,
                    });
                };
                let raw_key = entry[..colon].trim();
                let (key, optional) = match raw_key.strip_suffix('?') {
                    Some(key) => (key, true),
                    None => (raw_key, false),
                };
                if key.is_empty() {
                    return Err(self.error("empty shape key"));
                }
                let value = self.union(&entry[colon + 1..], depth)?;
                Ok(ShapeEntry { key: Some(key.to_string()), optional, value })
            })
            .collect()
    }

    fn name(&self, s: &str) -> Result<TypeExpression, TagError> {
        let s = s.trim();
        if !is_valid_name(s) {
            return Err(self.error(format!("`{s}` is not a valid type name")));
        }
        if is_keyword(s) {
            return Ok(TypeExpression::Keyword(s.to_ascii_lowercase()));
        }
        Ok(TypeExpression::Class(resolve_class_name(s, self.context)))
    }
}
