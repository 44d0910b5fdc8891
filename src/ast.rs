// Copyright (c) 2026 The hpgl developers.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single raw argument token, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the token in the whole input.
    pub offset: usize,
}

/// One command record: a two-letter mnemonic and its raw arguments.
///
/// Arguments are not interpreted by the tokenizer; for ignored commands they
/// may well not be numbers at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Command<'a> {
    /// Ordinal of the command in the stream, starting at 0.
    pub index: usize,
    /// Byte offset of the mnemonic.
    pub offset: usize,
    /// The mnemonic, always upper case.
    pub mnemonic: String,
    /// The argument span, without surrounding whitespace and terminator.
    pub raw: &'a str,
    pub args: Vec<Token<'a>>,
}

/// A point in plotter units, exactly as found in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// A continuous pen-down path.
pub type Polyline = Vec<Point>;

/// The polylines of a whole plot, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    pub polylines: Vec<Polyline>,
}

impl From<Vec<Polyline>> for Drawing {
    fn from(polylines: Vec<Polyline>) -> Self {
        Drawing { polylines }
    }
}

impl<'a> Display for Command<'a> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.mnemonic)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg.text)?;
        }
        write!(f, ";")
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Renders SVG path data, one subpath per polyline.
impl Display for Drawing {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first = true;
        for line in &self.polylines {
            for (i, point) in line.iter().enumerate() {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                let op = if i == 0 { 'M' } else { 'L' };
                write!(f, "{} {}", op, point)?;
            }
        }
        Ok(())
    }
}
