//! Hollow NoGo
//!
//! A 9x9 Go variant played on a board with eight permanently hollow cells.
//! Captures and suicide are both illegal, so the board only ever gains
//! stones; the first player with no legal placement loses.
//!
//! The crate provides the board rules engine ([`Board`]), the move
//! representation and its text encoding ([`Move`]), the board symmetry
//! group ([`Symmetry`]), and the [`NoGo`] game type that plugs the rules
//! into the engine seams.

pub mod board;
pub mod moves;
pub mod symmetry;

pub use board::{Board, BoardConfig, Color, MoveResult, Piece};
pub use moves::{Move, ParseMoveError, Point};
pub use symmetry::Symmetry;

use engine_core::Game;

/// Hollow NoGo as an [`engine_core::Game`].
///
/// Carries the board geometry and the precomputed full position list used
/// for candidate-move enumeration.
#[derive(Debug, Clone)]
pub struct NoGo {
    config: BoardConfig,
    points: Vec<Point>,
}

impl NoGo {
    pub fn new(config: BoardConfig) -> Self {
        let size = config.size();
        let points = (0..size)
            .flat_map(|x| (0..size).map(move |y| Point::new(x, y)))
            .collect();
        Self { config, points }
    }

    /// The standard 9x9 hollow layout.
    pub fn standard() -> Self {
        Self::new(BoardConfig::hollow_nogo())
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// A fresh empty board for this geometry, black to move.
    pub fn new_board(&self) -> Board {
        Board::new(&self.config)
    }

    /// Candidate placements for `color`, legality unchecked.
    pub fn moves_for(&self, color: Color) -> Vec<Move> {
        self.points
            .iter()
            .map(|&p| Move::Place(p, color))
            .collect()
    }
}

impl Game for NoGo {
    type Board = Board;
    type Move = Move;

    fn candidate_moves(&self, board: &Board) -> Vec<Move> {
        self.moves_for(board.to_move())
    }

    fn apply(&self, board: &mut Board, mv: Move) -> bool {
        board.place(mv).is_legal()
    }

    fn no_move(&self, board: &Board) -> Move {
        Move::Pass(board.to_move())
    }
}
