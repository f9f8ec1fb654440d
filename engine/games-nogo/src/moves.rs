//! Move representation and text encoding.
//!
//! Moves are immutable values: a stone placement or a pass, each carrying
//! its color. The text encoding follows GTP-style coordinates: a column
//! letter (skipping `I`) plus a 1-based row number, prefixed with a
//! one-character color tag, e.g. `BA1`, `WJ9`, `Bpass`.

use crate::board::Color;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Column letters. `I` is skipped by convention, so column index 8 is `J`.
const AXIS: &[u8] = b"ABCDEFGHJKLMNOPQRST";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("empty move string")]
    Empty,
    #[error("invalid color tag: {0}")]
    InvalidColor(char),
    #[error("invalid column letter: {0}")]
    InvalidColumn(char),
    #[error("invalid row: {0}")]
    InvalidRow(String),
}

/// A grid coordinate: `x` is the column, `y` the row, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub fn new(x: u8, y: u8) -> Point {
        Point { x, y }
    }

    /// Column letter for a zero-based column index.
    pub fn column_letter(x: u8) -> char {
        AXIS.get(x as usize).copied().unwrap_or(b'?') as char
    }

    fn column_index(letter: char) -> Option<u8> {
        AXIS.iter()
            .position(|&c| c == letter.to_ascii_uppercase() as u8)
            .map(|i| i as u8)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Point::column_letter(self.x), self.y as u32 + 1)
    }
}

impl FromStr for Point {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Point, ParseMoveError> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseMoveError::Empty)?;
        let x = Point::column_index(letter).ok_or(ParseMoveError::InvalidColumn(letter))?;
        let row = chars.as_str();
        let row: u32 = row
            .parse()
            .map_err(|_| ParseMoveError::InvalidRow(row.to_string()))?;
        if row == 0 || row > u8::MAX as u32 {
            return Err(ParseMoveError::InvalidRow(row.to_string()));
        }
        Ok(Point::new(x, (row - 1) as u8))
    }
}

/// A move: place a stone of a given color, or pass.
///
/// Pass is the no-move sentinel required by the agent contract; the board
/// itself never accepts it as legal in this variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Point, Color),
    Pass(Color),
}

impl Move {
    pub fn color(self) -> Color {
        match self {
            Move::Place(_, color) | Move::Pass(color) => color,
        }
    }

    pub fn point(self) -> Option<Point> {
        match self {
            Move::Place(point, _) => Some(point),
            Move::Pass(_) => None,
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(point, color) => write!(f, "{}{}", color.tag(), point),
            Move::Pass(color) => write!(f, "{}pass", color.tag()),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        let mut chars = s.chars();
        let tag = chars.next().ok_or(ParseMoveError::Empty)?;
        let color = Color::from_tag(tag).ok_or(ParseMoveError::InvalidColor(tag))?;
        let rest = chars.as_str();
        if rest.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass(color));
        }
        Ok(Move::Place(rest.parse()?, color))
    }
}
