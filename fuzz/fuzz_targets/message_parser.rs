//! Fuzz target for IRC line parsing
//!
//! Feeds arbitrary UTF-8 lines to the parser and checks that it never panics
//! and that every accepted line keeps its invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if let Ok(msg) = irc_line::parse(input) {
            assert_eq!(msg.raw(), input);
            assert_eq!(msg.parameters().len(), msg.middle().len() + 1);
        }
    }
});
