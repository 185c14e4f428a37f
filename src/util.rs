//! Small string helpers used by class-name resolution and the docblock
//! helper.

/// The first `\`-separated segment of a (possibly qualified) name.
///
/// - `"Foo"`         → `"Foo"`
/// - `"Foo\\Bar"`    → `"Foo"`
pub(crate) fn first_segment(name: &str) -> &str {
    name.split('\\').next().unwrap_or(name)
}

/// Strip the `/**` and `*/` delimiters from a docblock.  Input without
/// delimiters is returned unchanged.
pub(crate) fn docblock_inner(docblock: &str) -> &str {
    let trimmed = docblock.trim();
    let inner = trimmed.strip_prefix("/**").unwrap_or(trimmed);
    inner.strip_suffix("*/").unwrap_or(inner)
}

/// Strip the leading `*` gutter and surrounding whitespace from one
/// docblock line.
pub(crate) fn docblock_line(line: &str) -> &str {
    line.trim().trim_start_matches('*').trim()
}
