//! Parser for the body of PHPDoc `@param` tags.
//!
//! Given the text after `@param` (e.g. `int|null ...$ids The ids.`) the
//! parser works out the declared type, the variable name, whether the
//! parameter is variadic, and the description.  Type resolution and
//! description building are pluggable through [`docblock::TypeResolver`]
//! and [`docblock::DescriptionFactory`]; stock implementations of both are
//! included.
//!
//! ```
//! use phpdoc_param::docblock::{PhpDocTypeResolver, StandardDescriptionFactory, parse_param_tag};
//!
//! let tag = parse_param_tag(
//!     "string ...$parts The parts to join.",
//!     Some(&PhpDocTypeResolver),
//!     Some(&StandardDescriptionFactory),
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(tag.variable_name(), Some("parts"));
//! assert!(tag.is_variadic());
//! assert_eq!(tag.render(), "string ...$parts The parts to join.");
//! ```

pub mod config;
pub mod docblock;
pub mod error;
mod resolution;
pub mod types;
mod util;

pub use config::{ParserConfig, WhitespaceMode};
pub use error::TagError;
pub use types::{Description, InlineTag, ParamTag, ShapeEntry, TypeContext, TypeExpression};
