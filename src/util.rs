// Copyright (c) 2026 The hpgl developers.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use crate::ast::Token;

/// Split an argument span on commas and runs of whitespace.
///
/// A comma that is not preceded by a token since the last comma (or the start
/// of the span) produces an empty token, so that `1,,2` cannot silently turn
/// into two numbers.  A single trailing comma is accepted.
pub fn split_arguments(span: &str, base: usize) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;
    let mut have_value = false;
    for (i, ch) in span.char_indices() {
        if ch == ',' || is_blank(ch) {
            if let Some(s) = start.take() {
                tokens.push(Token { text: &span[s..i], offset: base + s });
                have_value = true;
            }
            if ch == ',' {
                if !have_value {
                    tokens.push(Token { text: &span[i..i], offset: base + i });
                }
                have_value = false;
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token { text: &span[s..], offset: base + s });
    }
    tokens
}

/// Whitespace as the grammar's `separator` rule knows it.
pub fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n' | '\u{0C}')
}

pub fn is_separator(ch: char) -> bool {
    is_blank(ch) || ch == ';'
}
