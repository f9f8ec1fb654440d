//! Typed game interface
//!
//! A game is a value (usually small and cheap to clone) that knows how to
//! enumerate moves for its board type and how to apply them. Keeping the
//! game as a value rather than free functions lets implementations carry
//! precomputed data, such as the full position list used for candidate
//! enumeration.

use std::fmt::Debug;

/// Trait describing the board and move semantics of one game.
///
/// Boards are expected to be small, fixed-size and cheap to copy; the
/// search clones them freely when expanding nodes and running rollouts.
pub trait Game: Send + Sync + 'static {
    /// Full game state, including whose turn it is.
    type Board: Clone + PartialEq + Debug + Send;

    /// A move as an immutable value. Equality is structural.
    type Move: Copy + PartialEq + Debug + Send;

    /// Every candidate move for the side to move, legality unchecked.
    ///
    /// Implementations should derive this from a precomputed full position
    /// list; callers filter by applying each candidate to a scratch board.
    fn candidate_moves(&self, board: &Self::Board) -> Vec<Self::Move>;

    /// Apply `mv` to `board`. Commits and returns `true` on a legal move,
    /// leaves the board untouched and returns `false` otherwise.
    fn apply(&self, board: &mut Self::Board, mv: Self::Move) -> bool;

    /// Sentinel move returned when the side to move has no legal move.
    fn no_move(&self, board: &Self::Board) -> Self::Move;
}
