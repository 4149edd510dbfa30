//! # irc-line
//!
//! Parses one line of IRC protocol text into a structured [`Message`]:
//! IRCv3 message tags, an optional prefix, the command, and the parameter
//! list split into middle parameters and a trailing one.
//!
//! The crate does no I/O. Callers frame lines themselves and pass each line
//! with its CRLF already stripped.
//!
//! ## Quick Start
//!
//! ```rust
//! use irc_line::{Message, Source};
//!
//! let raw = "@time=2023-01-01T12:00:00Z :nick!user@host PRIVMSG #channel :Hello!";
//! let message: Message = raw.parse().expect("Valid IRC message");
//!
//! assert_eq!(message.tag_value("time"), Some("2023-01-01T12:00:00Z"));
//! assert_eq!(message.middle(), ["#channel"]);
//! assert_eq!(message.trailing(), "Hello!");
//! assert!(matches!(message.source(), Some(Source::User { nick: "nick", .. })));
//! ```
//!
//! ## Tag escapes
//!
//! Tag values are unescaped following IRCv3 message-tags, so `\:` decodes
//! to `;` and `\s` to a space.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod message;
pub mod prefix;

pub use self::error::ParseError;
pub use self::message::{parse, parse_opt, Message, Tags};
pub use self::prefix::Source;
