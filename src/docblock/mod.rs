//! PHPDoc `@param` tag parsing.
//!
//! # Submodules
//!
//! - [`param`]: the tag body parser ([`ParamTagParser`]) and `render`.
//! - [`resolver`]: the [`TypeResolver`] collaborator and the stock
//!   [`PhpDocTypeResolver`].
//! - [`description`]: the [`DescriptionFactory`] collaborator and the stock
//!   [`StandardDescriptionFactory`].
//! - [`tags`]: `@param` extraction from whole docblocks.
//! - [`types`]: type-syntax helpers used by the resolver.

mod description;
mod param;
mod resolver;
mod tags;
pub(crate) mod types;

// ─── Re-exports ─────────────────────────────────────────────────────────────

pub use description::{DescriptionFactory, StandardDescriptionFactory};
pub use param::{ParamTagParser, parse_param_tag, render_param_tag};
pub use resolver::{PhpDocTypeResolver, TypeResolver};
pub use tags::extract_param_tags;
