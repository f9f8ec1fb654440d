//! Budgeted search loop.
//!
//! `MctsSearch` owns the game, the tuning parameters, the budget policy,
//! and the master RNG. Every `search` call builds a fresh tree from the
//! given board, runs iterations until the budget expires, recommends the
//! most-visited root child, and drops the tree. Only the RNG state
//! persists between calls, so a fixed seed plus an iteration budget gives
//! fully reproducible recommendations.

use crate::config::{BudgetPolicy, MctsConfig, SearchBudget};
use crate::tree::SearchTree;
use engine_core::Game;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SearchError {
    /// No candidate move reproduces the selected child's board. Indicates
    /// a game whose move application is not deterministic.
    #[error("no candidate move reproduces the selected child position")]
    MoveNotFound,
}

pub struct MctsSearch<G: Game> {
    game: G,
    config: MctsConfig,
    budget: Box<BudgetPolicy>,
    rng: ChaCha20Rng,
    move_index: u32,
}

impl<G: Game> MctsSearch<G> {
    /// Entropy-seeded search with the given budget policy.
    pub fn new(game: G, config: MctsConfig, budget: Box<BudgetPolicy>) -> Self {
        Self {
            game,
            config,
            budget,
            rng: ChaCha20Rng::from_entropy(),
            move_index: 0,
        }
    }

    /// Deterministic variant for reproducible runs and tests.
    pub fn with_seed(game: G, config: MctsConfig, budget: Box<BudgetPolicy>, seed: u64) -> Self {
        Self {
            game,
            config,
            budget,
            rng: ChaCha20Rng::seed_from_u64(seed),
            move_index: 0,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Reseed the random source for reproducibility.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
    }

    /// Replace the budget policy.
    pub fn set_budget(&mut self, budget: Box<BudgetPolicy>) {
        self.budget = budget;
    }

    /// Reset the per-episode move index fed to the budget policy.
    pub fn start_new_episode(&mut self) {
        self.move_index = 0;
    }

    /// Run one full search from `board` and recommend a move.
    ///
    /// Returns the game's no-move sentinel when the root has no legal
    /// children at all.
    pub fn search(&mut self, board: &G::Board) -> Result<G::Move, SearchError> {
        let budget = (self.budget)(self.move_index);
        self.move_index += 1;

        let tree_rng = ChaCha20Rng::seed_from_u64(self.rng.gen());
        let mut tree = SearchTree::new(&self.game, board.clone(), tree_rng);

        let mut iterations: u64 = 0;
        match budget {
            SearchBudget::Iterations(n) => {
                for _ in 0..n {
                    Self::iterate(&mut tree, &self.config);
                }
                iterations = n as u64;
            }
            SearchBudget::WallClock(limit) => {
                let start = Instant::now();
                while start.elapsed() < limit {
                    Self::iterate(&mut tree, &self.config);
                    iterations += 1;
                }
            }
        }

        let mv = match tree.best_child() {
            None => self.game.no_move(board),
            Some(id) => self
                .move_for_board(board, &tree.get(id).board)
                .ok_or(SearchError::MoveNotFound)?,
        };
        debug!(nodes = tree.len(), iterations, chosen = ?mv, "search finished");
        Ok(mv)
        // the tree (and every node in its arena) is dropped here
    }

    /// One select → expand → simulate → backpropagate cycle.
    fn iterate(tree: &mut SearchTree<'_, G>, config: &MctsConfig) {
        let mut current = tree.root();
        let mut path = vec![current];
        while tree.get(current).expanded {
            match tree.select_child(current, config) {
                Some(next) => {
                    path.push(next);
                    current = next;
                }
                None => break, // terminal node: simulate reports the loss
            }
        }
        tree.expand(current);
        let result = tree.simulate(current);
        tree.backpropagate(&path, result.start_side_won, result.first_move, config.rave);
    }

    /// Translate a child board back into the move that produces it by
    /// re-enumerating the candidates and matching resulting boards.
    fn move_for_board(&self, root: &G::Board, target: &G::Board) -> Option<G::Move> {
        for mv in self.game.candidate_moves(root) {
            let mut scratch = root.clone();
            if self.game.apply(&mut scratch, mv) && scratch == *target {
                return Some(mv);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_nogo::{BoardConfig, Color, Move, MoveResult, NoGo, Piece, Point};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn fixed(n: u32) -> Box<BudgetPolicy> {
        Box::new(move |_| SearchBudget::Iterations(n))
    }

    #[test]
    fn root_visits_equal_iteration_count() {
        let game = NoGo::new(BoardConfig::plain(3));
        let mut tree =
            SearchTree::new(&game, game.new_board(), ChaCha20Rng::seed_from_u64(9));
        let config = MctsConfig::default();
        for _ in 0..40 {
            MctsSearch::<NoGo>::iterate(&mut tree, &config);
        }
        assert_eq!(tree.get(tree.root()).visits, 40);
    }

    #[test]
    fn fixed_seed_and_iterations_are_deterministic() {
        let board = NoGo::standard().new_board();
        let mut moves = Vec::new();
        for _ in 0..2 {
            let mut search = MctsSearch::with_seed(
                NoGo::standard(),
                MctsConfig::default(),
                fixed(200),
                12345,
            );
            moves.push(search.search(&board).unwrap());
        }
        assert_eq!(moves[0], moves[1]);
    }

    #[test]
    fn rave_search_is_deterministic_too() {
        let board = NoGo::standard().new_board();
        let config = MctsConfig::default().with_rave(0.025);
        let mut a = MctsSearch::with_seed(NoGo::standard(), config.clone(), fixed(150), 7);
        let mut b = MctsSearch::with_seed(NoGo::standard(), config, fixed(150), 7);
        assert_eq!(a.search(&board).unwrap(), b.search(&board).unwrap());
    }

    #[test]
    fn recommendation_is_a_legal_move() {
        let mut board = NoGo::standard().new_board();
        let mut search =
            MctsSearch::with_seed(NoGo::standard(), MctsConfig::default(), fixed(100), 1);
        let mv = search.search(&board).unwrap();
        assert_eq!(board.place(mv), MoveResult::Legal);
    }

    #[test]
    fn sole_legal_move_is_found() {
        // 2x2 board, black A1, white B1: black's only legal move is A2
        let game = NoGo::new(BoardConfig::plain(2));
        let mut board = game.new_board();
        board.set(Point::new(0, 0), Piece::Black);
        board.set(Point::new(1, 0), Piece::White);
        board.set_to_move(Color::Black);

        let mut search = MctsSearch::with_seed(
            NoGo::new(BoardConfig::plain(2)),
            MctsConfig::default(),
            fixed(30),
            3,
        );
        let mv = search.search(&board).unwrap();
        assert_eq!(mv, Move::Place(Point::new(0, 1), Color::Black));
    }

    #[test]
    fn exhausted_position_returns_pass() {
        // the only 1x1 placement is suicide, so there is nothing to search
        let game = NoGo::new(BoardConfig::plain(1));
        let board = game.new_board();
        let mut search = MctsSearch::with_seed(
            NoGo::new(BoardConfig::plain(1)),
            MctsConfig::default(),
            fixed(10),
            5,
        );
        assert_eq!(search.search(&board).unwrap(), Move::Pass(Color::Black));
    }

    #[test]
    fn zero_wall_clock_budget_passes_without_iterating() {
        let game = NoGo::standard();
        let board = game.new_board();
        let mut search = MctsSearch::with_seed(
            NoGo::standard(),
            MctsConfig::default(),
            Box::new(|_| SearchBudget::WallClock(Duration::ZERO)),
            5,
        );
        assert_eq!(search.search(&board).unwrap(), Move::Pass(Color::Black));
    }

    #[test]
    fn budget_policy_sees_the_move_index() {
        let seen = Arc::new(AtomicU32::new(0));
        let record = Arc::clone(&seen);
        let policy: Box<BudgetPolicy> = Box::new(move |index| {
            record.store(index + 1, Ordering::SeqCst);
            SearchBudget::Iterations(1)
        });
        let board = NoGo::standard().new_board();
        let mut search =
            MctsSearch::with_seed(NoGo::standard(), MctsConfig::default(), policy, 2);

        let _ = search.search(&board).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 1); // index 0
        let _ = search.search(&board).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 2); // index 1

        search.start_new_episode();
        let _ = search.search(&board).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 1); // back to index 0
    }

    #[test]
    fn search_prefers_the_survivable_reply() {
        // 2x2 endgame: capturing black at A1 is illegal, so white's only
        // playable reply is B2
        let game = NoGo::new(BoardConfig::plain(2));
        let mut board = game.new_board();
        board.set(Point::new(0, 0), Piece::Black); // A1
        board.set(Point::new(1, 0), Piece::White); // B1
        board.set_to_move(Color::White);

        // white to move: B2 would capture nothing and keeps a liberty,
        // A2 would capture black A1 and is therefore illegal
        let mut check = board.clone();
        assert_eq!(
            check.place(Move::Place(Point::new(0, 1), Color::White)),
            MoveResult::IllegalTake
        );

        let mut search = MctsSearch::with_seed(
            NoGo::new(BoardConfig::plain(2)),
            MctsConfig::default(),
            fixed(50),
            11,
        );
        let mv = search.search(&board).unwrap();
        assert_eq!(mv, Move::Place(Point::new(1, 1), Color::White));
    }

    #[test]
    fn reseeding_restores_the_sequence() {
        let board = NoGo::standard().new_board();
        let mut search =
            MctsSearch::with_seed(NoGo::standard(), MctsConfig::default(), fixed(120), 99);
        let first = search.search(&board).unwrap();
        search.reseed(99);
        assert_eq!(search.search(&board).unwrap(), first);
    }
}
