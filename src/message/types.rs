use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::tags::Tags;
use crate::error::ParseError;
use crate::prefix::Source;

/// A parsed IRC line.
///
/// Immutable once built: components are read through accessors, and the
/// consuming `with_*` builders are the only way to set them. Components that
/// are never set stay empty.
///
/// ```rust
/// use irc_line::Message;
///
/// let msg: Message = "@id=234AB;rose :dan!d@localhost PRIVMSG #chan :Hey!".parse().unwrap();
/// assert_eq!(msg.command(), "PRIVMSG");
/// assert_eq!(msg.tag_value("id"), Some("234AB"));
/// assert!(msg.has_tag("rose"));
/// assert_eq!(msg.parameters(), vec!["#chan", "Hey!"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    raw: String,
    tags: Tags,
    prefix: String,
    command: String,
    middle: Vec<String>,
    trailing: Option<String>,
}

impl Message {
    /// Create a message with only its raw text and command set.
    pub fn new(raw: impl Into<String>, command: impl Into<String>) -> Self {
        Message {
            raw: raw.into(),
            command: command.into(),
            ..Message::default()
        }
    }

    /// Replace all tags.
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Add a single tag, overwriting an earlier one with the same key.
    pub fn with_tag(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.tags.insert(key.into(), value.map(Into::into));
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_middle<I, S>(mut self, middle: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middle = middle.into_iter().map(Into::into).collect();
        self
    }

    /// Set the trailing parameter. An empty string still counts as present.
    pub fn with_trailing(mut self, trailing: impl Into<String>) -> Self {
        self.trailing = Some(trailing.into());
        self
    }

    /// The exact line this message was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Whether the tag is present, with or without a value.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    /// The value of a tag. Key-only and missing tags both yield `None`;
    /// use [`Message::has_tag`] to tell them apart.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags.get(key).and_then(|v| v.as_deref())
    }

    /// The prefix text, or `""` when the line had none.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The prefix split into server name or user mask.
    pub fn source(&self) -> Option<Source<'_>> {
        if self.prefix.is_empty() {
            None
        } else {
            Some(Source::parse(&self.prefix))
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Positional parameters, in order.
    pub fn middle(&self) -> &[String] {
        &self.middle
    }

    /// The trailing parameter, or `""` when the line had none.
    pub fn trailing(&self) -> &str {
        self.trailing.as_deref().unwrap_or_default()
    }

    /// Whether the line carried a `:` trailing parameter, even an empty one.
    pub fn has_trailing(&self) -> bool {
        self.trailing.is_some()
    }

    /// Middle parameters followed by the trailing one.
    ///
    /// The trailing slot is always present, so the length is always
    /// `middle().len() + 1`.
    pub fn parameters(&self) -> Vec<&str> {
        self.middle
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.trailing()))
            .collect()
    }
}

impl FromStr for Message {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_empty() {
        let msg = Message::new("PING", "PING");
        assert_eq!(msg.raw(), "PING");
        assert!(msg.tags().is_empty());
        assert_eq!(msg.prefix(), "");
        assert!(msg.source().is_none());
        assert!(msg.middle().is_empty());
        assert_eq!(msg.trailing(), "");
        assert!(!msg.has_trailing());
        assert_eq!(msg.parameters(), vec![""]);
    }

    #[test]
    fn test_builders() {
        let msg = Message::new("raw", "PRIVMSG")
            .with_tag("time", Some("now"))
            .with_tag("flag", None::<String>)
            .with_prefix("nick!user@host")
            .with_middle(["#chan"])
            .with_trailing("hello");

        assert_eq!(msg.tag_value("time"), Some("now"));
        assert!(msg.has_tag("flag"));
        assert_eq!(msg.tag_value("flag"), None);
        assert!(!msg.has_tag("missing"));
        assert_eq!(msg.source().and_then(|s| s.nickname()), Some("nick"));
        assert_eq!(msg.parameters(), vec!["#chan", "hello"]);
    }

    #[test]
    fn test_empty_trailing_is_present() {
        let msg = Message::new("raw", "TOPIC").with_trailing("");
        assert!(msg.has_trailing());
        assert_eq!(msg.trailing(), "");
        assert_eq!(msg.parameters().len(), 1);
    }

    #[test]
    fn test_with_tags_replaces() {
        let mut tags = Tags::new();
        tags.insert("a".to_owned(), Some("1".to_owned()));
        let msg = Message::new("raw", "CMD")
            .with_tag("b", Some("2"))
            .with_tags(tags);
        assert_eq!(msg.tags().len(), 1);
        assert_eq!(msg.tag_value("a"), Some("1"));
    }
}
