//! IRC line parsing: lexer, tag decoding and the owned [`Message`].

pub mod lexer;
mod parse;
pub mod tags;
mod types;

pub use self::lexer::{lex, Tokens};
pub use self::parse::{parse, parse_opt};
pub use self::tags::Tags;
pub use self::types::Message;
