/// Class-name resolution against a [`TypeContext`].
///
/// Takes a raw class name as it appears in a docblock and turns it into a
/// fully-qualified name (without the leading `\`), following PHP's rules:
///
///   - Fully-qualified names (`\PDO`, `\Couchbase\Cluster`) are used as-is
///   - `namespace\Foo` is relative to the current namespace
///   - Unqualified and qualified names whose first segment matches an
///     import are expanded through the import table
///   - Everything else is prefixed with the current namespace
use crate::types::TypeContext;
use crate::util::first_segment;

impl TypeContext {
    /// Resolve `name` to a fully-qualified class name without the leading
    /// `\`.
    pub fn resolve_class_name(&self, name: &str) -> String {
        // Fully qualified: strip the leading `\` and stop.
        if let Some(fqn) = name.strip_prefix('\\') {
            return fqn.to_string();
        }

        // `namespace\Foo` is relative to the current namespace.
        if let Some(rest) = name
            .get(..10)
            .filter(|prefix| prefix.eq_ignore_ascii_case("namespace\\"))
            .map(|_| &name[10..])
        {
            return self.prefix_namespace(rest);
        }

        let head = first_segment(name);
        if let Some(fqn) = self.alias(head) {
            // `Foo` → import, `Foo\Bar` → import + `\Bar`.
            let tail = &name[head.len()..];
            return format!("{fqn}{tail}");
        }

        self.prefix_namespace(name)
    }

    fn prefix_namespace(&self, name: &str) -> String {
        if self.namespace().is_empty() {
            name.to_string()
        } else {
            format!("{}\\{}", self.namespace(), name)
        }
    }
}

/// Resolve `name` with an optional context.  Without a context the name is
/// only stripped of a leading `\`.
pub(crate) fn resolve_class_name(name: &str, context: Option<&TypeContext>) -> String {
    match context {
        Some(ctx) => ctx.resolve_class_name(name),
        None => name.strip_prefix('\\').unwrap_or(name).to_string(),
    }
}
