// Copyright (c) 2026 The hpgl developers.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! An HP-GL parsing library that turns plotter command streams into
//! polylines.
//!
//! The stream is split into commands (two-letter mnemonics with their
//! argument lists) using the Pest parser library.  Only the pen motion
//! commands `PU` and `PD` are interpreted, everything else is skipped while
//! keeping the tokenizer in sync.  Coordinates are returned in plotter units,
//! exactly as they appear in the input; transforming them is up to the
//! caller.
//!
//! ## Basic usage
//!
//! Use `hpgl::read_polylines` to get all polylines at once, or combine
//! `hpgl::parse::commands` with an `hpgl::interp::Interpreter` to receive
//! individual path events.
//!
//! The following code (the same as the "hpgl-parse" demo binary without
//! options) takes a file as an argument, parses it and outputs the drawing as
//! SVG path data.
//!
//! ```rust,no_run
//! use std::{env, fs};
//! use hpgl::{ast::Drawing, read_polylines};
//!
//! fn main() {
//!     let filename = env::args().nth(1).unwrap();
//!     let input = fs::read_to_string(&filename).unwrap();
//!
//!     match read_polylines(&input) {
//!         Err(e) => eprintln!("Parse error: {}", e),
//!         Ok(lines) => println!("{}", Drawing::from(lines)),
//!     }
//! }
//! ```
//!
//! ## Labels
//!
//! Label text (`LB`) is skipped up to the label terminator, which is ETX by
//! default and can be changed with `DT`.  Nothing inside a label is taken as
//! a command.
//!
//! ## Empty input
//!
//! Input that is empty or consists only of whitespace and `;` is not an
//! error; it simply yields no polylines.

pub mod ast;
pub mod error;
pub mod interp;
pub mod parse;

// internal helpers
pub(crate) mod util;

use crate::ast::Polyline;
use crate::error::ParseError;
use crate::interp::{Interpreter, PolylineBuilder};
use crate::parse::ParseOptions;

pub use crate::error::ErrorKind;

/// Parse a whole stream into polylines, with default options.
pub fn read_polylines(input: &str) -> Result<Vec<Polyline>, ParseError> {
    read_polylines_with(input, &ParseOptions::default())
}

/// Parse a whole stream into polylines.
///
/// Either all polylines are returned, or the first error.
pub fn read_polylines_with(input: &str, options: &ParseOptions) -> Result<Vec<Polyline>, ParseError> {
    let mut builder = PolylineBuilder::new();
    Interpreter::new(options.clone()).run(parse::commands(input), |event| builder.push(event))?;
    Ok(builder.finish())
}
