//! IRCv3 message tag decoding.
//!
//! A tag blob is the text between the leading `@` and the first space:
//!
//! ```text
//! tags  = tag *[ ";" tag ]
//! tag   = key [ "=" value ]
//! ```

use std::collections::HashMap;

/// Decoded message tags. A `None` value marks a key-only tag.
pub type Tags = HashMap<String, Option<String>>;

/// Split a raw tag blob into its key/value entries.
///
/// Each token is split once on the first `=`, so `a=b=c` has the value `b=c`
/// and `a=` has the empty value. Empty tokens are skipped and a repeated key
/// keeps its last value.
pub fn parse_tags(blob: &str) -> Tags {
    let mut tags = Tags::new();
    for token in blob.split(';').filter(|t| !t.is_empty()) {
        match token.split_once('=') {
            Some((key, value)) => {
                tags.insert(key.to_owned(), Some(unescape_tag_value(value)));
            }
            None => {
                tags.insert(token.to_owned(), None);
            }
        }
    }
    tags
}

/// Decode the escape sequences of a tag value in one forward pass.
///
/// | Escape | Decodes to |
/// |--------|------------|
/// | `\:`   | `;`        |
/// | `\s`   | space      |
/// | `\\`   | `\`        |
/// | `\r`   | CR         |
/// | `\n`   | LF         |
///
/// Any other escaped character stands for itself, and a lone trailing
/// backslash is dropped. Decoded output is never rescanned, so `\\s` yields
/// `\s` rather than a space.
pub fn unescape_tag_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let mut after = rest[pos + 1..].chars();
        match after.next() {
            Some(':') => out.push(';'),
            Some('s') => out.push(' '),
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some(other) => out.push(other),
            None => {}
        }
        rest = after.as_str();
    }

    out.push_str(rest);
    out
}
