#![allow(dead_code)]

use phpdoc_param::docblock::{
    DescriptionFactory, PhpDocTypeResolver, StandardDescriptionFactory, TypeResolver,
    parse_param_tag,
};
use phpdoc_param::{Description, ParamTag, TagError, TypeContext, TypeExpression};

/// Install a `tracing` subscriber honouring `RUST_LOG`.  Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse with the stock collaborators and no context.
pub fn parse(body: &str) -> ParamTag {
    parse_in(body, None)
}

/// Parse with the stock collaborators and the given context.
pub fn parse_in(body: &str, context: Option<&TypeContext>) -> ParamTag {
    init_tracing();
    parse_param_tag(body, Some(&PhpDocTypeResolver), Some(&StandardDescriptionFactory), context)
        .unwrap_or_else(|e| panic!("failed to parse `{body}`: {e}"))
}

/// Resolve a type token with the stock resolver and no context.
pub fn resolve(token: &str) -> TypeExpression {
    PhpDocTypeResolver
        .resolve(token, None)
        .unwrap_or_else(|e| panic!("failed to resolve `{token}`: {e}"))
}

pub fn keyword(name: &str) -> TypeExpression {
    TypeExpression::Keyword(name.to_string())
}

pub fn class(fqn: &str) -> TypeExpression {
    TypeExpression::Class(fqn.to_string())
}

/// A resolver that echoes the raw token back as a class name,
/// so tests can see exactly which token reached the type position.
pub struct EchoResolver;

impl TypeResolver for EchoResolver {
    fn resolve(
        &self,
        token: &str,
        _context: Option<&TypeContext>,
    ) -> Result<TypeExpression, TagError> {
        Ok(TypeExpression::Class(token.to_string()))
    }
}

/// A description factory that keeps the text verbatim, untrimmed.
pub struct VerbatimDescriptions;

impl DescriptionFactory for VerbatimDescriptions {
    fn create(&self, text: &str, _context: Option<&TypeContext>) -> Result<Description, TagError> {
        Ok(Description::new(text, Vec::new()))
    }
}

/// A resolver that always fails, for checking error pass-through.
pub struct FailingResolver;

impl TypeResolver for FailingResolver {
    fn resolve(
        &self,
        token: &str,
        _context: Option<&TypeContext>,
    ) -> Result<TypeExpression, TagError> {
        Err(TagError::invalid_type(token, "rejected by test resolver"))
    }
}
