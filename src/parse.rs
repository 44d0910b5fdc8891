// Copyright (c) 2026 The hpgl developers.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use log::trace;
use pest::Parser;
use pest_derive::Parser;

use crate::ast::*;
use crate::error::{ErrorKind, ParseError};
use crate::util::{is_blank, is_separator, split_arguments};

#[derive(Parser)]
#[grammar = "hpgl.pest"]
pub struct HpglParser;

/// Default label terminator (ETX).
pub const ETX: char = '\u{3}';

// Longest excerpt of unparseable input kept in an error.
const MAX_EXCERPT: usize = 16;

/// Settings that affect how a stream is read.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Accept any finite number `f64` can parse (e.g. `.5` or `1e3`), not
    /// only the `[+-]digits[.digits]` form.
    pub lenient_numbers: bool,
}

/// Convert a numeric parameter, or `None` if it is not a valid number.
pub fn number(text: &str, options: &ParseOptions) -> Option<f64> {
    if options.lenient_numbers {
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    } else if HpglParser::parse(Rule::number, text).is_ok() {
        // long digit strings still overflow to infinity
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    } else {
        None
    }
}

/// Split `input` into commands.
pub fn commands(input: &str) -> Commands<'_> {
    Commands { input, pos: 0, index: 0, terminator: ETX, done: false }
}

/// Lazy iterator over the commands of a stream.
///
/// Stops after the first error.
pub struct Commands<'a> {
    input: &'a str,
    pos: usize,
    index: usize,
    // label terminator, as set by DT
    terminator: char,
    done: bool,
}

impl<'a> Commands<'a> {
    fn next_command(&mut self) -> Result<Option<Command<'a>>, ParseError> {
        let input = self.input;
        let rest = &input[self.pos..];
        let head = HpglParser::parse(Rule::head, rest)
            .ok()
            .and_then(|mut pairs| pairs.next())
            .and_then(|pair| pair.into_inner().next());
        let head = match head {
            Some(pair) if pair.as_rule() == Rule::mnemonic => pair,
            Some(_) => return Ok(None),
            None => return Err(self.unrecognized()),
        };

        let offset = self.pos + head.as_span().start();
        let mnemonic = head.as_str().to_ascii_uppercase();
        self.pos += head.as_span().end();

        let (raw, args) = match mnemonic.as_str() {
            "LB" => self.label(),
            "DT" => self.define_terminator(),
            _ => self.arguments(),
        };
        let command = Command { index: self.index, offset, mnemonic, raw, args };
        self.index += 1;
        trace!("command {}: {}", command.index, command);
        Ok(Some(command))
    }

    fn arguments(&mut self) -> (&'a str, Vec<Token<'a>>) {
        let input = self.input;
        let rest = &input[self.pos..];
        let span = HpglParser::parse(Rule::arguments, rest)
            .ok()
            .and_then(|mut pairs| pairs.next())
            .map(|pair| {
                let end = pair.as_span().end();
                let span = pair.into_inner().find(|p| p.as_rule() == Rule::span);
                (span.map_or(0, |p| p.as_span().end()), end)
            });
        // "arguments" matches the empty string, so this only guards the types
        let (span_end, end) = span.unwrap_or((0, 0));

        let base = self.pos;
        let span = &rest[..span_end];
        self.pos += end;
        let args = split_arguments(span, base);
        (span.trim_matches(is_blank), args)
    }

    fn label(&mut self) -> (&'a str, Vec<Token<'a>>) {
        let input = self.input;
        let rest = &input[self.pos..];
        let (text, consumed) = match rest.find(self.terminator) {
            Some(i) => (&rest[..i], i + self.terminator.len_utf8()),
            None => (rest, rest.len()),
        };
        let token = Token { text, offset: self.pos };
        self.pos += consumed;
        (text, vec![token])
    }

    fn define_terminator(&mut self) -> (&'a str, Vec<Token<'a>>) {
        let input = self.input;
        let start = self.pos;
        let mut tokens = vec![];
        match input[start..].chars().next() {
            None | Some(';') | Some('\0') | Some('\n') | Some('\u{1B}') => {
                self.terminator = ETX;
            }
            Some(ch) => {
                let len = ch.len_utf8();
                tokens.push(Token { text: &input[start..start + len], offset: start });
                self.terminator = ch;
                self.pos += len;
            }
        }
        // the optional mode parameter
        if input[self.pos..].starts_with(',') {
            self.pos += 1;
        }
        let (_, mode) = self.arguments();
        tokens.extend(mode);
        (input[start..self.pos].trim_end_matches(';').trim_matches(is_blank), tokens)
    }

    fn unrecognized(&self) -> ParseError {
        let rest = &self.input[self.pos..];
        let offset = self.pos + rest.len() - rest.trim_start_matches(is_separator).len();
        let excerpt: String = self.input[offset..]
            .chars()
            .take_while(|&ch| !is_separator(ch))
            .take(MAX_EXCERPT)
            .collect();
        ParseError::new(ErrorKind::UnrecognizedSyntax, excerpt, offset, self.index)
    }
}

impl<'a> Iterator for Commands<'a> {
    type Item = Result<Command<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_command() {
            Ok(Some(command)) => Some(Ok(command)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
