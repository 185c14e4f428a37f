//! Type-syntax helpers for PHPDoc type tokens.
//!
//! These work on raw token text only: splitting at nesting depth 0,
//! detecting grouping parentheses and generic / shape suffixes, and
//! classifying built-in keywords.  Building the actual
//! [`TypeExpression`](crate::types::TypeExpression) is the resolver's job.

/// Built-in PHPDoc type keywords.  Anything else that looks like a name is
/// treated as a class.
pub(crate) const KEYWORD_TYPES: &[&str] = &[
    "int",
    "integer",
    "float",
    "double",
    "string",
    "bool",
    "boolean",
    "void",
    "never",
    "null",
    "false",
    "true",
    "array",
    "callable",
    "iterable",
    "resource",
    "mixed",
    "object",
    "self",
    "static",
    "parent",
    "scalar",
    "numeric",
    "list",
    "array-key",
    "class-string",
    "callable-string",
    "numeric-string",
    "non-empty-string",
    "non-empty-array",
    "non-empty-list",
    "positive-int",
    "negative-int",
    "key-of",
    "value-of",
    "no-return",
    "never-return",
];

/// Check whether `s` is an open integer-range bound (`min` / `max`), as in
/// `int<0,max>`.  Only meaningful inside the parameters of `int`.
pub(crate) fn is_range_bound(s: &str) -> bool {
    s.eq_ignore_ascii_case("min") || s.eq_ignore_ascii_case("max")
}

/// Check whether a name is a built-in keyword type (case-insensitive).
pub(crate) fn is_keyword(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    KEYWORD_TYPES.contains(&lower.as_str())
}

fn opening(c: char) -> Option<char> {
    match c {
        ')' => Some('('),
        '>' => Some('<'),
        '}' => Some('{'),
        ']' => Some('['),
        _ => None,
    }
}

/// Verify that `()`, `<>`, `{}` and `[]` are balanced and correctly
/// nested.  Quoted literals are skipped.
pub(crate) fn check_balanced(s: &str) -> Result<(), &'static str> {
    let mut stack = Vec::new();
    let mut quote: Option<char> = None;
    for c in s.chars() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' | '<' | '{' | '[' => stack.push(c),
            ')' | '>' | '}' | ']' => {
                if stack.pop() != opening(c) {
                    return Err("unbalanced brackets");
                }
            }
            _ => {}
        }
    }
    if quote.is_some() {
        return Err("unterminated string literal");
    }
    if !stack.is_empty() {
        return Err("unbalanced brackets");
    }
    Ok(())
}

/// Iterate `(byte_index, char)` pairs of `s` that sit at nesting depth 0
/// and outside quoted literals.
fn depth0_chars(s: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    s.char_indices().filter(move |&(_, c)| {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            return false;
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                false
            }
            '(' | '<' | '{' | '[' => {
                depth += 1;
                false
            }
            ')' | '>' | '}' | ']' => {
                depth -= 1;
                false
            }
            _ => depth == 0,
        }
    })
}

/// Split `s` on `sep` at nesting depth 0.
///
/// - `"int|string"`                  with `'|'` → `["int", "string"]`
/// - `"array<int|string>|null"`      with `'|'` → `["array<int|string>", "null"]`
/// - `"int, Collection<int, User>"`  with `','` → `["int", " Collection<int, User>"]`
pub(crate) fn split_depth0(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c) in depth0_chars(s) {
        if c == sep {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Position of the first depth-0 occurrence of `needle` in `s`.
pub(crate) fn find_depth0(s: &str, needle: char) -> Option<usize> {
    depth0_chars(s).find(|&(_, c)| c == needle).map(|(i, _)| i)
}

/// If `s` is entirely wrapped in one pair of parentheses, return the inside.
///
/// `"(A|B)"` → `Some("A|B")`, `"(A)|(B)"` → `None`.
pub(crate) fn strip_grouping(s: &str) -> Option<&str> {
    let inner = s.strip_prefix('(')?.strip_suffix(')')?;
    // The closing paren must match the opening one, i.e. the inside
    // must itself be balanced.
    check_balanced(inner).ok()?;
    Some(inner)
}

/// Split `Base<params>` (or `Base{entries}` with `open = '{'`) into base
/// and inner text.  The bracket must open at depth 0 and close at the very
/// end of `s`.
///
/// - `"array<int, User>"` with `'<'` → `Some(("array", "int, User"))`
/// - `"array{id: int}"`   with `'{'` → `Some(("array", "id: int"))`
pub(crate) fn split_suffix_block(s: &str, open: char, close: char) -> Option<(&str, &str)> {
    let start = s.find(open)?;
    if start == 0 {
        return None;
    }
    let base = &s[..start];
    let inner = s.get(start + open.len_utf8()..)?.strip_suffix(close)?;
    check_balanced(inner).ok()?;
    Some((base, inner))
}

/// Whether `s` is a literal value usable as a type (`'foo'`, `"bar"`,
/// `42`, `-1`, `1.5`).
pub(crate) fn is_literal(s: &str) -> bool {
    let quoted = s.len() >= 2
        && ((s.starts_with('\'') && s.ends_with('\'')) || (s.starts_with('"') && s.ends_with('"')));
    if quoted {
        return true;
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '_')
        && digits.starts_with(|c: char| c.is_ascii_digit())
        && !digits.ends_with('_')
        && digits.matches('.').count() <= 1
}

/// Whether `s` is a syntactically valid (possibly qualified) class-like or
/// keyword name.
///
/// Segments may contain ASCII alphanumerics, `_`, `-` (for keywords such
/// as `class-string`) and any non-ASCII character, and must not start with
/// a digit.
pub(crate) fn is_valid_name(s: &str) -> bool {
    let s = s.strip_prefix('\\').unwrap_or(s);
    !s.is_empty()
        && s.split('\\').all(|segment| {
            !segment.is_empty()
                && !segment.starts_with(|c: char| c.is_ascii_digit() || c == '-')
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii())
        })
}
