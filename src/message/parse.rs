use tracing::{debug, trace};

use super::lexer::lex;
use super::tags::parse_tags;
use super::types::Message;
use crate::error::{ParseError, Result};

/// Parse one IRC line (already stripped of its CRLF) into a [`Message`].
///
/// ```rust
/// use irc_line::{parse, ParseError};
///
/// let msg = parse("PING :tungsten.freenode.net").unwrap();
/// assert_eq!(msg.command(), "PING");
/// assert_eq!(msg.trailing(), "tungsten.freenode.net");
///
/// assert_eq!(parse(""), Err(ParseError::EmptyInput));
/// assert_eq!(parse(":server.only"), Err(ParseError::MalformedPrefix));
/// ```
pub fn parse(input: &str) -> Result<Message> {
    let result = build(input);
    match &result {
        Ok(msg) => trace!(
            command = msg.command(),
            middle = msg.middle().len(),
            tags = msg.tags().len(),
            "parsed irc line"
        ),
        Err(e) => debug!(kind = e.kind(), line = input, "rejected irc line"),
    }
    result
}

/// Like [`parse`], for callers that may have no line at all.
/// `None` fails with [`ParseError::EmptyInput`].
pub fn parse_opt(input: Option<&str>) -> Result<Message> {
    parse(input.unwrap_or_default())
}

fn build(input: &str) -> Result<Message> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let tokens = lex(input)?;
    let tags = tokens.tags.map(parse_tags).unwrap_or_default();

    let mut msg = Message::new(input, tokens.command)
        .with_tags(tags)
        .with_prefix(tokens.prefix.unwrap_or_default())
        .with_middle(tokens.middle);
    if let Some(trailing) = tokens.trailing {
        msg = msg.with_trailing(trailing);
    }
    Ok(msg)
}
