//! Board symmetry group.
//!
//! The eight symmetries of the square (identity, three rotations, two axis
//! reflections, two diagonal reflections) form a closed group: composing
//! any symmetry with its inverse round-trips a board.

use crate::board::Board;
use crate::moves::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    /// Quarter turn clockwise.
    Rotate90,
    /// Half turn.
    Rotate180,
    /// Quarter turn counterclockwise.
    Rotate270,
    /// Mirror across the vertical axis (columns reversed).
    ReflectHorizontal,
    /// Mirror across the horizontal axis (rows reversed).
    ReflectVertical,
    /// Mirror across the main diagonal.
    Transpose,
    /// Mirror across the anti-diagonal.
    AntiTranspose,
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::ReflectHorizontal,
        Symmetry::ReflectVertical,
        Symmetry::Transpose,
        Symmetry::AntiTranspose,
    ];

    /// The symmetry that undoes this one. Only the quarter turns are not
    /// their own inverse.
    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            other => other,
        }
    }

    /// Where `p` lands on a board of the given size.
    pub fn map_point(self, p: Point, size: u8) -> Point {
        let n = size - 1;
        match self {
            Symmetry::Identity => p,
            Symmetry::Rotate90 => Point::new(p.y, n - p.x),
            Symmetry::Rotate180 => Point::new(n - p.x, n - p.y),
            Symmetry::Rotate270 => Point::new(n - p.y, p.x),
            Symmetry::ReflectHorizontal => Point::new(n - p.x, p.y),
            Symmetry::ReflectVertical => Point::new(p.x, n - p.y),
            Symmetry::Transpose => Point::new(p.y, p.x),
            Symmetry::AntiTranspose => Point::new(n - p.y, n - p.x),
        }
    }

    /// Pure transformation: returns the transformed board, side to move
    /// unchanged.
    pub fn apply(self, board: &Board) -> Board {
        let mut out = board.clone();
        for p in board.points() {
            out.set(self.map_point(p, board.size()), board.get(p));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardConfig, Color, MoveResult, Piece};
    use crate::moves::Move;

    fn sample_board() -> Board {
        let mut board = Board::new(&BoardConfig::hollow_nogo());
        for (mv, expect) in [
            (Move::Place(Point::new(0, 0), Color::Black), MoveResult::Legal),
            (Move::Place(Point::new(3, 7), Color::White), MoveResult::Legal),
            (Move::Place(Point::new(5, 2), Color::Black), MoveResult::Legal),
            (Move::Place(Point::new(8, 4), Color::White), MoveResult::Legal),
        ] {
            assert_eq!(board.place(mv), expect);
        }
        board
    }

    #[test]
    fn round_trip_all_symmetries() {
        let board = sample_board();
        for sym in Symmetry::ALL {
            let there = sym.apply(&board);
            let back = sym.inverse().apply(&there);
            assert_eq!(back, board, "{sym:?} failed to round-trip");
        }
    }

    #[test]
    fn full_sequence_round_trips() {
        let board = sample_board();
        let mut current = board.clone();
        for sym in Symmetry::ALL {
            current = sym.apply(&current);
        }
        for sym in Symmetry::ALL.iter().rev() {
            current = sym.inverse().apply(&current);
        }
        assert_eq!(current, board);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let board = sample_board();
        let mut current = board.clone();
        for _ in 0..4 {
            current = Symmetry::Rotate90.apply(&current);
        }
        assert_eq!(current, board);
    }

    #[test]
    fn rotate90_moves_corner_stone() {
        let mut board = Board::new(&BoardConfig::plain(9));
        board.set(Point::new(0, 0), Piece::Black);
        let rotated = Symmetry::Rotate90.apply(&board);
        assert_eq!(rotated.get(Point::new(0, 8)), Piece::Black);
        assert_eq!(rotated.get(Point::new(0, 0)), Piece::Empty);
    }

    #[test]
    fn hollow_layout_is_symmetric() {
        // the standard hollow pattern maps onto itself under all 8 symmetries
        let board = Board::new(&BoardConfig::hollow_nogo());
        for sym in Symmetry::ALL {
            assert_eq!(sym.apply(&board), board, "{sym:?}");
        }
    }

    #[test]
    fn transpose_is_own_inverse() {
        let board = sample_board();
        let twice = Symmetry::Transpose.apply(&Symmetry::Transpose.apply(&board));
        assert_eq!(twice, board);
    }
}
