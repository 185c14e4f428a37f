//! Tests for the stock PHPDoc type resolver and class-name resolution
//! against a `TypeContext`.

mod common;

use common::*;
use phpdoc_param::docblock::{
    PhpDocTypeResolver, StandardDescriptionFactory, TypeResolver, parse_param_tag,
};
use phpdoc_param::{ShapeEntry, TagError, TypeContext, TypeExpression};

fn resolve_in(token: &str, ctx: &TypeContext) -> TypeExpression {
    PhpDocTypeResolver
        .resolve(token, Some(ctx))
        .unwrap_or_else(|e| panic!("failed to resolve `{token}`: {e}"))
}

fn resolve_err(token: &str) -> TagError {
    PhpDocTypeResolver.resolve(token, None).unwrap_err()
}

// ─── Keywords and classes ───────────────────────────────────────────

#[test]
fn keywords_are_lowercased() {
    assert_eq!(resolve("int"), keyword("int"));
    assert_eq!(resolve("String"), keyword("string"));
    assert_eq!(resolve("class-string"), keyword("class-string"));
    assert_eq!(resolve("non-empty-string"), keyword("non-empty-string"));
}

#[test]
fn class_without_context_keeps_its_name() {
    assert_eq!(resolve("User"), class("User"));
    assert_eq!(resolve("\\App\\User"), class("App\\User"));
}

#[test]
fn literals() {
    assert_eq!(resolve("'foo'"), TypeExpression::Literal("'foo'".to_string()));
    assert_eq!(resolve("42"), TypeExpression::Literal("42".to_string()));
    assert_eq!(resolve("-1"), TypeExpression::Literal("-1".to_string()));
}

// ─── Compound types ─────────────────────────────────────────────────

#[test]
fn union_and_nullable() {
    assert_eq!(resolve("int|null"), TypeExpression::Union(vec![keyword("int"), keyword("null")]));
    assert_eq!(resolve("?User"), TypeExpression::Nullable(Box::new(class("User"))));
}

#[test]
fn intersection_binds_tighter_than_union() {
    assert_eq!(
        resolve("A&B|C"),
        TypeExpression::Union(vec![
            TypeExpression::Intersection(vec![class("A"), class("B")]),
            class("C"),
        ])
    );
}

#[test]
fn grouping_parentheses() {
    assert_eq!(
        resolve("A&(B|C)"),
        TypeExpression::Intersection(vec![
            class("A"),
            TypeExpression::Union(vec![class("B"), class("C")]),
        ])
    );
}

#[test]
fn arrays() {
    assert_eq!(resolve("User[]"), TypeExpression::Array(Box::new(class("User"))));
    assert_eq!(
        resolve("int[][]"),
        TypeExpression::Array(Box::new(TypeExpression::Array(Box::new(keyword("int")))))
    );
    assert_eq!(
        resolve("(int|string)[]"),
        TypeExpression::Array(Box::new(TypeExpression::Union(vec![
            keyword("int"),
            keyword("string"),
        ])))
    );
}

#[test]
fn nullable_and_array_wrappers_nest_in_order() {
    assert_eq!(
        resolve("?int[]"),
        TypeExpression::Nullable(Box::new(TypeExpression::Array(Box::new(keyword("int")))))
    );
    assert_eq!(
        resolve("?(?User)[]"),
        TypeExpression::Nullable(Box::new(TypeExpression::Array(Box::new(
            TypeExpression::Nullable(Box::new(class("User")))
        ))))
    );
}

#[test]
fn generics() {
    assert_eq!(
        resolve("array<int,User>"),
        TypeExpression::Generic {
            base: Box::new(keyword("array")),
            params: vec![keyword("int"), class("User")],
        }
    );
    assert_eq!(
        resolve("Collection<int,list<User|null>>"),
        TypeExpression::Generic {
            base: Box::new(class("Collection")),
            params: vec![
                keyword("int"),
                TypeExpression::Generic {
                    base: Box::new(keyword("list")),
                    params: vec![TypeExpression::Union(vec![class("User"), keyword("null")])],
                },
            ],
        }
    );
}

#[test]
fn shapes() {
    assert_eq!(
        resolve("array{id:int,name?:string,User}"),
        TypeExpression::Shape {
            base: Box::new(keyword("array")),
            entries: vec![
                ShapeEntry { key: Some("id".to_string()), optional: false, value: keyword("int") },
                ShapeEntry {
                    key: Some("name".to_string()),
                    optional: true,
                    value: keyword("string"),
                },
                ShapeEntry { key: None, optional: false, value: class("User") },
            ],
        }
    );
    assert_eq!(
        resolve("object{}"),
        TypeExpression::Shape { base: Box::new(keyword("object")), entries: vec![] }
    );
}

#[test]
fn integer_range_bounds_are_keywords() {
    assert_eq!(
        resolve("int<0,max>"),
        TypeExpression::Generic {
            base: Box::new(keyword("int")),
            params: vec![TypeExpression::Literal("0".to_string()), keyword("max")],
        }
    );
    assert_eq!(
        resolve("int<MIN,-1>"),
        TypeExpression::Generic {
            base: Box::new(keyword("int")),
            params: vec![keyword("min"), TypeExpression::Literal("-1".to_string())],
        }
    );
    // Outside `int<…>` they are ordinary names.
    assert_eq!(
        resolve("Collection<max>"),
        TypeExpression::Generic { base: Box::new(class("Collection")), params: vec![class("max")] }
    );
}

// ─── Display ────────────────────────────────────────────────────────

#[test]
fn display_has_no_whitespace_and_reresolves() {
    for token in [
        "int|null",
        "?\\App\\User",
        "array<int,string>",
        "(A|B)[]",
        "A&(B|C)",
        "array{id:int,name?:string}",
        "?(int|string)",
        "'a'|'b'",
    ] {
        let first = resolve(token);
        let shown = first.to_string();
        assert!(!shown.contains(char::is_whitespace), "{shown:?}");
        assert_eq!(resolve(&shown), first, "re-resolving {shown:?}");
    }
}

#[test]
fn display_of_classes_is_fully_qualified() {
    let ctx = TypeContext::new("App");
    assert_eq!(resolve_in("User|null", &ctx).to_string(), "\\App\\User|null");
}

// ─── Context resolution ─────────────────────────────────────────────

#[test]
fn namespace_prefix() {
    let ctx = TypeContext::new("App\\Models");
    assert_eq!(resolve_in("User", &ctx), class("App\\Models\\User"));
    assert_eq!(resolve_in("Sub\\Thing", &ctx), class("App\\Models\\Sub\\Thing"));
}

#[test]
fn leading_backslash_in_namespace_is_ignored() {
    let ctx = TypeContext::new("\\App");
    assert_eq!(ctx.namespace(), "App");
    assert_eq!(resolve_in("User", &ctx), class("App\\User"));
}

#[test]
fn fully_qualified_ignores_context() {
    let ctx = TypeContext::new("App").with_alias("User", "Other\\User");
    assert_eq!(resolve_in("\\User", &ctx), class("User"));
}

#[test]
fn aliases_expand_first_segment() {
    let ctx = TypeContext::new("App")
        .with_alias("Carbon", "Carbon\\CarbonImmutable")
        .with_alias("Models", "\\App\\Domain\\Models");
    assert_eq!(resolve_in("Carbon", &ctx), class("Carbon\\CarbonImmutable"));
    assert_eq!(resolve_in("carbon", &ctx), class("Carbon\\CarbonImmutable"));
    assert_eq!(resolve_in("Models\\User", &ctx), class("App\\Domain\\Models\\User"));
}

#[test]
fn namespace_keyword_is_current_namespace() {
    let ctx = TypeContext::new("App\\Http").with_alias("Request", "Vendor\\Request");
    assert_eq!(resolve_in("namespace\\Request", &ctx), class("App\\Http\\Request"));
}

#[test]
fn global_namespace_context() {
    let ctx = TypeContext::new("");
    assert_eq!(resolve_in("User", &ctx), class("User"));
}

#[test]
fn keywords_are_not_namespaced() {
    let ctx = TypeContext::new("App");
    assert_eq!(resolve_in("array<int,mixed>", &ctx).to_string(), "array<int,mixed>");
}

// ─── Malformed tokens ───────────────────────────────────────────────

#[test]
fn malformed_tokens_are_rejected() {
    let tokens = [
        "", "array<int", "Foo>", "int|", "|int", "(A|B", "1abc", "Foo::bar", "array{:int}", "1.2.3",
        "1__",
    ];
    for token in tokens {
        let err = resolve_err(token);
        assert!(matches!(err, TagError::InvalidType { .. }), "{token:?} gave {err}");
    }
}

#[test]
fn error_names_the_whole_token() {
    match resolve_err("Foo|Bar::baz") {
        TagError::InvalidType { token, reason } => {
            assert_eq!(token, "Foo|Bar::baz");
            assert!(reason.contains("Bar::baz"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ─── Nesting depth ──────────────────────────────────────────────────

fn assert_too_deep(token: &str) {
    match resolve_err(token) {
        TagError::InvalidType { reason, .. } => assert_eq!(reason, "type nested too deeply"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn moderate_nesting_resolves() {
    let token = format!("int{}", "[]".repeat(32));
    assert_eq!(resolve(&token).to_string(), token);
    let token = format!("{}int{}", "(".repeat(20), ")".repeat(20));
    assert_eq!(resolve(&token), keyword("int"));
}

#[test]
fn deep_nesting_is_rejected() {
    assert_too_deep(&format!("int{}", "[]".repeat(20_000)));
    assert_too_deep(&format!("{}int", "?".repeat(20_000)));
    assert_too_deep(&format!("{}int{}", "(".repeat(5_000), ")".repeat(5_000)));
    assert_too_deep(&format!("{}int{}", "list<".repeat(5_000), ">".repeat(5_000)));
    assert_too_deep(&format!("{}int{}", "array{a:".repeat(5_000), "}".repeat(5_000)));
}

#[test]
fn deep_nesting_fails_the_parse() {
    let body = format!("int{} $x", "[]".repeat(20_000));
    let err = parse_param_tag(
        &body,
        Some(&PhpDocTypeResolver),
        Some(&StandardDescriptionFactory),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, TagError::InvalidType { .. }), "{err}");
}
