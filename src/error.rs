// Copyright (c) 2026 The hpgl developers.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use pest::Position;
use strum_macros::Display;
use thiserror::Error;

/// The reason a parse was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// No mnemonic where a new command was expected.
    #[strum(to_string = "unrecognized syntax")]
    UnrecognizedSyntax,
    /// A `PU`/`PD` argument is not a number.
    #[strum(to_string = "malformed number")]
    MalformedNumber,
    /// A `PU`/`PD` argument list cannot be split into pairs.
    #[strum(to_string = "odd number of coordinates")]
    OddCoordinateCount,
}

/// A terminal parse error, positioned in the input.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} `{raw}` in command {command} at byte {offset}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// The offending piece of input.
    pub raw: String,
    /// Byte offset of `raw` in the input.
    pub offset: usize,
    /// Index of the command being processed.
    pub command: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, raw: impl Into<String>, offset: usize, command: usize) -> Self {
        ParseError { kind, raw: raw.into(), offset, command }
    }

    /// Line and column (both 1-based) of the error in `input`.
    ///
    /// The offset is clamped to the length of `input`.
    pub fn line_col(&self, input: &str) -> (usize, usize) {
        match Position::new(input, self.offset.min(input.len())) {
            Some(pos) => pos.line_col(),
            None => (1, 1),
        }
    }
}
