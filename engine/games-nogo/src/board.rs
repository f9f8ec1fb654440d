//! Board state and legality rules for Hollow NoGo.
//!
//! The board is a fixed-size square grid. Eight cells of the standard
//! layout are "hollow": permanently non-playable, never empty for liberty
//! purposes. A placement is legal only if the placed group keeps at least
//! one liberty (no suicide) and no adjacent opponent group is reduced to
//! zero liberties (no capture).

use crate::moves::{Move, Point};
use std::collections::VecDeque;
use std::fmt;

/// Stone colors. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// One-character tag used in the move text encoding.
    pub fn tag(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }

    pub fn from_tag(tag: char) -> Option<Color> {
        match tag.to_ascii_uppercase() {
            'B' => Some(Color::Black),
            'W' => Some(Color::White),
            _ => None,
        }
    }

    fn piece(self) -> Piece {
        match self {
            Color::Black => Piece::Black,
            Color::White => Piece::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Empty,
    Black,
    White,
    /// Permanently non-playable. Distinct from empty: a hollow cell is
    /// never a liberty.
    Hollow,
}

/// Outcome of applying a move to a board.
///
/// Legality is data, not an error: callers branch on the returned code.
/// Variants are ordered by severity for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MoveResult {
    Legal,
    IllegalTurn,
    IllegalPass,
    IllegalOutOfRange,
    IllegalNotEmpty,
    IllegalSuicide,
    IllegalTake,
}

impl MoveResult {
    pub fn is_legal(self) -> bool {
        self == MoveResult::Legal
    }

    /// Numeric reward code: 0 for a legal move, -1 through -6 otherwise.
    pub fn reward(self) -> i32 {
        match self {
            MoveResult::Legal => 0,
            MoveResult::IllegalTurn => -1,
            MoveResult::IllegalPass => -2,
            MoveResult::IllegalOutOfRange => -3,
            MoveResult::IllegalNotEmpty => -4,
            MoveResult::IllegalSuicide => -5,
            MoveResult::IllegalTake => -6,
        }
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MoveResult::Legal => "legal",
            MoveResult::IllegalTurn => "illegal_turn",
            MoveResult::IllegalPass => "illegal_pass",
            MoveResult::IllegalOutOfRange => "illegal_out_of_range",
            MoveResult::IllegalNotEmpty => "illegal_not_empty",
            MoveResult::IllegalSuicide => "illegal_suicide",
            MoveResult::IllegalTake => "illegal_take",
        };
        write!(f, "{reason}")
    }
}

/// Immutable board geometry: grid size and the hollow-cell layout.
///
/// Constructed once and handed to the components that need it; the grid
/// itself bakes the hollow cells in at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    size: u8,
    hollow: Vec<Point>,
}

impl BoardConfig {
    /// The standard 9x9 Hollow NoGo layout:
    ///
    /// ```text
    ///   A B C D E F G H J
    /// 9 + + + + + + + + + 9
    /// 8 + + + +   + + + + 8
    /// 7 + + + +   + + + + 7
    /// 6 + + + + + + + + + 6
    /// 5 +     + + +     + 5
    /// 4 + + + + + + + + + 4
    /// 3 + + + +   + + + + 3
    /// 2 + + + +   + + + + 2
    /// 1 + + + + + + + + + 1
    ///   A B C D E F G H J
    /// ```
    pub fn hollow_nogo() -> Self {
        Self::with_hollow(
            9,
            vec![
                Point::new(4, 1),
                Point::new(4, 2),
                Point::new(4, 6),
                Point::new(4, 7),
                Point::new(1, 4),
                Point::new(2, 4),
                Point::new(6, 4),
                Point::new(7, 4),
            ],
        )
    }

    /// A square board of the given size with no hollow cells.
    pub fn plain(size: u8) -> Self {
        Self::with_hollow(size, Vec::new())
    }

    pub fn with_hollow(size: u8, hollow: Vec<Point>) -> Self {
        debug_assert!(size > 0);
        debug_assert!(hollow.iter().all(|p| p.x < size && p.y < size));
        Self { size, hollow }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn hollow_points(&self) -> &[Point] {
        &self.hollow
    }
}

/// Game state: grid contents plus whose turn it is.
///
/// Equality compares grids only; the side to move is deliberately excluded
/// so that a position reached by search expansion matches the same position
/// reached by re-applying a candidate move.
#[derive(Debug, Clone)]
pub struct Board {
    size: u8,
    cells: Vec<Piece>,
    to_move: Color,
}

impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Board {
    /// Empty board with the hollow cells of `config` baked in.
    /// Black moves first.
    pub fn new(config: &BoardConfig) -> Self {
        let size = config.size();
        let mut cells = vec![Piece::Empty; size as usize * size as usize];
        for &p in config.hollow_points() {
            cells[p.x as usize * size as usize + p.y as usize] = Piece::Hollow;
        }
        Self {
            size,
            cells,
            to_move: Color::Black,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn in_range(&self, p: Point) -> bool {
        p.x < self.size && p.y < self.size
    }

    pub fn get(&self, p: Point) -> Piece {
        debug_assert!(self.in_range(p));
        self.cells[self.index(p)]
    }

    /// Directly set a cell, bypassing all legality checks.
    /// Intended for position setup in tests and tools.
    pub fn set(&mut self, p: Point, piece: Piece) {
        debug_assert!(self.in_range(p));
        let idx = self.index(p);
        self.cells[idx] = piece;
    }

    /// Override whose turn it is. Position-setup companion to [`Board::set`].
    pub fn set_to_move(&mut self, color: Color) {
        self.to_move = color;
    }

    /// All grid points, playable or not, in column-major canonical order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Point::new(x, y)))
    }

    /// Apply a move. On a legal placement the stone is committed and the
    /// turn flips; otherwise the board is left untouched and the reason is
    /// returned.
    ///
    /// Check order: turn, pass, range/hollow, occupancy, suicide, take.
    pub fn place(&mut self, mv: Move) -> MoveResult {
        let (point, color) = match mv {
            Move::Pass(color) => {
                if color != self.to_move {
                    return MoveResult::IllegalTurn;
                }
                // passing is not a legal move in this variant
                return MoveResult::IllegalPass;
            }
            Move::Place(point, color) => (point, color),
        };
        if color != self.to_move {
            return MoveResult::IllegalTurn;
        }
        if !self.in_range(point) || self.get(point) == Piece::Hollow {
            return MoveResult::IllegalOutOfRange;
        }
        if self.get(point) != Piece::Empty {
            return MoveResult::IllegalNotEmpty;
        }

        // tentative placement on a scratch copy
        let mut trial = self.clone();
        trial.set(point, color.piece());
        if trial.liberties(point, color) == Some(0) {
            return MoveResult::IllegalSuicide;
        }
        let opponent = color.opponent();
        for neighbor in self.neighbors(point) {
            if trial.liberties(neighbor, opponent) == Some(0) {
                return MoveResult::IllegalTake;
            }
        }

        self.set(point, color.piece());
        self.to_move = opponent;
        MoveResult::Legal
    }

    /// Liberty count of the connected group at `point`, or `None` if that
    /// cell does not hold a stone of `color`.
    ///
    /// Breadth-first over same-color-connected cells; each adjacent empty
    /// cell counts once. Hollow cells are neither traversed nor counted.
    /// Never mutates the board.
    pub fn liberties(&self, point: Point, color: Color) -> Option<u32> {
        if !self.in_range(point) || self.get(point) != color.piece() {
            return None;
        }

        let mut visited = vec![false; self.cells.len()];
        let mut counted = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        visited[self.index(point)] = true;
        queue.push_back(point);

        let mut liberties = 0u32;
        while let Some(p) = queue.pop_front() {
            for n in self.neighbors(p) {
                let idx = self.index(n);
                match self.get(n) {
                    Piece::Empty => {
                        if !counted[idx] {
                            counted[idx] = true;
                            liberties += 1;
                        }
                    }
                    piece if piece == color.piece() => {
                        if !visited[idx] {
                            visited[idx] = true;
                            queue.push_back(n);
                        }
                    }
                    _ => {}
                }
            }
        }
        Some(liberties)
    }

    fn index(&self, p: Point) -> usize {
        p.x as usize * self.size as usize + p.y as usize
    }

    fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> {
        let size = self.size as i32;
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dx, dy)| {
                let nx = p.x as i32 + dx;
                let ny = p.y as i32 + dy;
                (nx >= 0 && ny >= 0 && nx < size && ny < size)
                    .then(|| Point::new(nx as u8, ny as u8))
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: String = (0..self.size)
            .map(|x| format!(" {}", Point::column_letter(x)))
            .collect();
        writeln!(f, "  {header}")?;
        for y in (0..self.size).rev() {
            write!(f, "{:>2}", y + 1)?;
            for x in 0..self.size {
                let glyph = match self.get(Point::new(x, y)) {
                    Piece::Empty => '.',
                    Piece::Black => 'X',
                    Piece::White => 'O',
                    Piece::Hollow => ' ',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f, " {}", y + 1)?;
        }
        writeln!(f, "  {header}")
    }
}
