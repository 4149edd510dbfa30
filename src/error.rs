//! Error types for IRC line parsing.
//!
//! Every failure is detected during the single forward scan over the line
//! and returned immediately; no partially built message escapes.

use thiserror::Error;

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Errors encountered when parsing an IRC line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The line was empty (or absent).
    #[error("empty input")]
    EmptyInput,

    /// The `@` tag section has no terminating space.
    #[error("malformed tags: tag section is not followed by a space")]
    MalformedTags,

    /// The `:` prefix section has no terminating space, so no command follows.
    #[error("malformed prefix: prefix is not followed by a command")]
    MalformedPrefix,

    /// The line ended where a command was expected.
    #[error("malformed command: no command found")]
    MalformedCommand,
}

impl ParseError {
    /// Short, stable name of the failure kind, suitable for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "empty_input",
            ParseError::MalformedTags => "malformed_tags",
            ParseError::MalformedPrefix => "malformed_prefix",
            ParseError::MalformedCommand => "malformed_command",
        }
    }
}
