//! Error types for `@param` tag parsing.
//!
//! [`TagError`] covers three groups of failures:
//!
//! - **Precondition failures** ([`TagError::InvalidArgument`]): raised by
//!   the parser before any work is done (empty body, missing collaborator).
//! - **Collaborator failures** ([`TagError::InvalidType`],
//!   [`TagError::InvalidDescription`]): produced by a [`TypeResolver`] or a
//!   [`DescriptionFactory`].  The parser never catches or rewraps these;
//!   they reach the caller exactly as the collaborator returned them.
//! - **Configuration failures** ([`TagError::Io`], [`TagError::Config`],
//!   [`TagError::HomeDir`]): raised while loading a [`ParserConfig`].
//!
//! [`TypeResolver`]: crate::docblock::TypeResolver
//! [`DescriptionFactory`]: crate::docblock::DescriptionFactory
//! [`ParserConfig`]: crate::config::ParserConfig

use std::fmt;
use std::io;

use etcetera::HomeDirError;

#[derive(Debug)]
pub enum TagError {
    /// An input to the parser violated a precondition.
    InvalidArgument(&'static str),

    /// A type token could not be resolved into a type expression.
    InvalidType { token: String, reason: String },

    /// The description text contained malformed inline markup.
    ///
    /// `offset` is the byte offset into the (trimmed) description text
    /// where the problem starts.
    InvalidDescription { offset: usize, reason: String },

    /// Reading a configuration file failed.
    Io(io::Error),

    /// A configuration file was not valid TOML or had unknown keys.
    Config(toml::de::Error),

    /// The user's home directory could not be determined.
    HomeDir(HomeDirError),
}

impl TagError {
    /// Shorthand for building an [`TagError::InvalidType`].
    pub fn invalid_type(token: impl Into<String>, reason: impl Into<String>) -> Self {
        TagError::InvalidType { token: token.into(), reason: reason.into() }
    }

    /// Returns `true` for precondition failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TagError::InvalidArgument(_))
    }
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            TagError::InvalidType { token, reason } => {
                write!(f, "invalid type `{token}`: {reason}")
            }
            TagError::InvalidDescription { offset, reason } => {
                write!(f, "invalid description at byte {offset}: {reason}")
            }
            TagError::Io(error) => write!(f, "failed to read configuration: {error}"),
            TagError::Config(error) => write!(f, "failed to parse configuration: {error}"),
            TagError::HomeDir(error) => {
                write!(f, "failed to locate the configuration directory: {error}")
            }
        }
    }
}

impl std::error::Error for TagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TagError::Io(error) => Some(error),
            TagError::Config(error) => Some(error),
            TagError::HomeDir(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for TagError {
    fn from(error: io::Error) -> Self {
        TagError::Io(error)
    }
}

impl From<toml::de::Error> for TagError {
    fn from(error: toml::de::Error) -> Self {
        TagError::Config(error)
    }
}

impl From<HomeDirError> for TagError {
    fn from(error: HomeDirError) -> Self {
        TagError::HomeDir(error)
    }
}
