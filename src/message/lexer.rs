//! Nom-based lexer splitting an IRC line into borrowed sections.
//!
//! ```text
//! [ "@" tags SPACE ] [ ":" prefix SPACE ] command [ params ]
//! ```
//!
//! Only the ASCII space separates sections. Runs of spaces between sections
//! and between middle parameters count as a single delimiter.

use nom::{
    bytes::complete::{take_till1, take_until},
    character::complete::char,
    combinator::{cut, opt},
    sequence::preceded,
    IResult,
};

use crate::error::ParseError;

/// The sections of one IRC line, borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    /// Raw tag blob (without the leading `@`), if present.
    pub tags: Option<&'a str>,
    /// Raw prefix (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    /// The command token.
    pub command: &'a str,
    /// Positional parameters in order.
    pub middle: Vec<&'a str>,
    /// Trailing parameter (without the leading `:`), if present.
    pub trailing: Option<&'a str>,
}

/// `@` followed by everything up to the first space. Once the `@` matched,
/// a missing space is a hard failure.
fn tag_section(input: &str) -> IResult<&str, Option<&str>> {
    opt(preceded(char('@'), cut(take_until(" "))))(input)
}

/// `:` followed by everything up to the next space.
fn prefix_section(input: &str) -> IResult<&str, Option<&str>> {
    opt(preceded(char(':'), cut(take_until(" "))))(input)
}

fn command_token(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == ' ')(input)
}

fn skip_spaces(input: &str) -> &str {
    input.trim_start_matches(' ')
}

/// Collect middle parameters until the end of the line or a `:` marker.
fn params(mut rest: &str) -> (Vec<&str>, Option<&str>) {
    let mut middle = Vec::new();

    while !rest.is_empty() {
        if let Some(trailing) = rest.strip_prefix(':') {
            return (middle, Some(trailing));
        }

        match rest.find(' ') {
            Some(end) => {
                middle.push(&rest[..end]);
                rest = skip_spaces(&rest[end..]);
            }
            None => {
                // Last segment; it cannot contain a space, so it is one parameter.
                middle.push(rest);
                break;
            }
        }
    }

    (middle, None)
}

/// Split a single line (without CRLF) into its sections.
///
/// The input must be non-empty; emptiness is rejected by the caller.
pub fn lex(input: &str) -> Result<Tokens<'_>, ParseError> {
    let (rest, tags) = tag_section(input).map_err(|_| ParseError::MalformedTags)?;
    let rest = skip_spaces(rest);

    let (rest, prefix) = prefix_section(rest).map_err(|_| ParseError::MalformedPrefix)?;
    let rest = skip_spaces(rest);

    let (rest, command) = command_token(rest).map_err(|_| ParseError::MalformedCommand)?;
    let rest = skip_spaces(rest);

    let (middle, trailing) = params(rest);

    Ok(Tokens {
        tags,
        prefix,
        command,
        middle,
        trailing,
    })
}
