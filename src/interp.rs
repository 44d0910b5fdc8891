// Copyright (c) 2026 The hpgl developers.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::mem;
use itertools::Itertools;
use log::{debug, trace};
use strum_macros::EnumString;

use crate::ast::*;
use crate::error::{ErrorKind, ParseError};
use crate::parse::{number, ParseOptions};

/// Whether motion draws.  Parsed from the `PU`/`PD` mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum PenState {
    #[strum(serialize = "PU")]
    Up,
    #[strum(serialize = "PD")]
    Down,
}

impl Default for PenState {
    fn default() -> Self {
        PenState::Up
    }
}

/// Path building instruction produced by the interpreter.
///
/// Every polyline begins with a `MoveTo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathEvent {
    MoveTo(Point),
    LineTo(Point),
}

/// The Interpreter follows pen motion through a command stream and reports
/// the drawn geometry as path events.
///
/// Any command other than `PU` and `PD` is skipped.  Coordinates are passed
/// through exactly as parsed.
pub struct Interpreter {
    options: ParseOptions,
    state: State,
}

#[derive(Default)]
struct State {
    pen: PenState,
    position: Option<Point>,
    // set while a polyline is open for the current pen-down run
    drawing: bool,
}

impl Interpreter {
    pub fn new(options: ParseOptions) -> Self {
        Interpreter { options, state: State::default() }
    }

    /// Interpret all `commands`, stopping at the first error.
    pub fn run<'a, I, F>(&mut self, commands: I, mut sink: F) -> Result<(), ParseError>
    where I: IntoIterator<Item = Result<Command<'a>, ParseError>>,
          F: FnMut(PathEvent)
    {
        for command in commands {
            self.step(&command?, &mut sink)?;
        }
        Ok(())
    }

    /// Interpret a single command.
    pub fn step<F>(&mut self, command: &Command, sink: &mut F) -> Result<(), ParseError>
    where F: FnMut(PathEvent)
    {
        let pen = match command.mnemonic.parse::<PenState>() {
            Ok(pen) => pen,
            Err(_) => {
                trace!("ignoring {} in command {}", command.mnemonic, command.index);
                return Ok(());
            }
        };
        let points = self.coordinates(command)?;
        match pen {
            PenState::Up => self.pen_up(&points),
            PenState::Down => self.pen_down(&points, sink),
        }
        Ok(())
    }

    pub fn pen(&self) -> PenState {
        self.state.pen
    }

    /// The last point reached, if any coordinate was seen yet.
    pub fn position(&self) -> Option<Point> {
        self.state.position
    }

    // -- private API --

    fn pen_up(&mut self, points: &[Point]) {
        self.state.pen = PenState::Up;
        self.state.drawing = false;
        // only the final pair of a move matters
        if let Some(&last) = points.last() {
            self.state.position = Some(last);
        }
    }

    fn pen_down<F>(&mut self, points: &[Point], sink: &mut F)
    where F: FnMut(PathEvent)
    {
        self.state.pen = PenState::Down;
        if points.is_empty() {
            if let (false, Some(pos)) = (self.state.drawing, self.state.position) {
                sink(PathEvent::MoveTo(pos));
                self.state.drawing = true;
            }
            return;
        }
        for &point in points {
            if self.state.drawing {
                sink(PathEvent::LineTo(point));
            } else {
                self.state.drawing = true;
                match self.state.position {
                    Some(start) => {
                        sink(PathEvent::MoveTo(start));
                        sink(PathEvent::LineTo(point));
                    }
                    None => sink(PathEvent::MoveTo(point)),
                }
            }
            self.state.position = Some(point);
        }
    }

    fn coordinates(&self, command: &Command) -> Result<Vec<Point>, ParseError> {
        let mut values = Vec::with_capacity(command.args.len());
        for token in &command.args {
            match number(token.text, &self.options) {
                Some(v) => values.push(v),
                None => return Err(ParseError::new(ErrorKind::MalformedNumber, token.text,
                                                   token.offset, command.index)),
            }
        }
        if values.len() % 2 != 0 {
            return Err(ParseError::new(ErrorKind::OddCoordinateCount, command.raw,
                                       command.offset, command.index));
        }
        Ok(values.into_iter().tuples().map(|(x, y)| Point::new(x, y)).collect())
    }
}

/// Collects path events into polylines.
///
/// Polylines with less than two points never drew anything and are dropped.
#[derive(Debug, Default)]
pub struct PolylineBuilder {
    lines: Vec<Polyline>,
    current: Polyline,
}

impl PolylineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PathEvent) {
        match event {
            PathEvent::MoveTo(point) => {
                self.flush();
                self.current.push(point);
            }
            PathEvent::LineTo(point) => self.current.push(point),
        }
    }

    pub fn finish(mut self) -> Vec<Polyline> {
        self.flush();
        self.lines
    }

    fn flush(&mut self) {
        let line = mem::take(&mut self.current);
        match line.len() {
            0 => (),
            1 => debug!("dropping lone point {}", line[0]),
            n => {
                debug!("polyline {} with {} points", self.lines.len(), n);
                self.lines.push(line);
            }
        }
    }
}
