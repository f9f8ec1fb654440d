//! Random rollouts.

use engine_core::Game;
use rand::seq::SliceRandom;
use rand::Rng;

/// Outcome of one playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rollout<M> {
    /// Whether the side to move at the rollout's starting board won.
    pub start_side_won: bool,
    /// First move played, if any; used for RAVE credit at the leaf.
    pub first_move: Option<M>,
}

/// Play uniformly random legal moves until the side to move is stuck.
/// The side unable to move loses.
///
/// Per turn the candidates are shuffled and the first legal one is played,
/// so the playout terminates as soon as a whole shuffled list fails to
/// apply. On a board where the side to move already has no legal move, the
/// start side loses immediately.
pub fn rollout<G: Game>(game: &G, board: &G::Board, rng: &mut impl Rng) -> Rollout<G::Move> {
    let mut board = board.clone();
    let mut first_move = None;
    // parity flag: is the current side to move the start side?
    let mut start_side_to_move = true;

    loop {
        let mut candidates = game.candidate_moves(&board);
        candidates.shuffle(rng);

        let mut played = None;
        for mv in candidates {
            if game.apply(&mut board, mv) {
                played = Some(mv);
                break;
            }
        }

        match played {
            Some(mv) => {
                if first_move.is_none() {
                    first_move = Some(mv);
                }
                start_side_to_move = !start_side_to_move;
            }
            None => {
                // the side to move loses
                return Rollout {
                    start_side_won: !start_side_to_move,
                    first_move,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Game;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// Toy game: a countdown of N remaining moves; each move decrements.
    /// The side to move at zero loses. With `from` odd the start side
    /// always wins, with `from` even it always loses.
    #[derive(Debug, Clone)]
    struct Countdown;

    impl Game for Countdown {
        type Board = u32;
        type Move = u32;

        fn candidate_moves(&self, board: &u32) -> Vec<u32> {
            if *board > 0 {
                vec![*board]
            } else {
                Vec::new()
            }
        }

        fn apply(&self, board: &mut u32, mv: u32) -> bool {
            if *board > 0 && mv == *board {
                *board -= 1;
                true
            } else {
                false
            }
        }

        fn no_move(&self, _board: &u32) -> u32 {
            0
        }
    }

    #[test]
    fn stuck_start_side_loses_immediately() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let result = rollout(&Countdown, &0u32, &mut rng);
        assert!(!result.start_side_won);
        assert_eq!(result.first_move, None);
    }

    #[test]
    fn odd_move_count_means_start_side_wins() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for from in [1u32, 3, 5, 7] {
            let result = rollout(&Countdown, &from, &mut rng);
            assert!(result.start_side_won, "from {from}");
            assert_eq!(result.first_move, Some(from));
        }
    }

    #[test]
    fn even_move_count_means_start_side_loses() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for from in [2u32, 4, 6, 8] {
            let result = rollout(&Countdown, &from, &mut rng);
            assert!(!result.start_side_won, "from {from}");
        }
    }
}
