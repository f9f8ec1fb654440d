//! Episode orchestration.
//!
//! One episode: both agents are opened with a `black:white` tag, take
//! alternating turns from an empty board, and the first side to produce an
//! illegal move (including the pass sentinel, since passing is illegal in
//! this variant) loses. Both agents are then closed with the winner's
//! name.

use engine_core::Agent;
use games_nogo::{Color, NoGo};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeOutcome {
    pub winner: Color,
    pub winner_name: String,
    /// Number of legal moves played.
    pub moves: u32,
    pub duration: Duration,
}

pub fn run_episode(
    game: &NoGo,
    black: &mut dyn Agent<NoGo>,
    white: &mut dyn Agent<NoGo>,
) -> EpisodeOutcome {
    let mut board = game.new_board();
    let tag = format!("{}:{}", black.name(), white.name());
    black.open_episode(&tag);
    white.open_episode(&tag);

    let start = Instant::now();
    let mut moves = 0u32;
    let winner = loop {
        let to_move = board.to_move();
        let mv = match to_move {
            Color::Black => black.take_action(&board),
            Color::White => white.take_action(&board),
        };
        if !board.place(mv).is_legal() {
            // the side that cannot produce a legal move loses
            break to_move.opponent();
        }
        moves += 1;
    };

    let winner_name = match winner {
        Color::Black => black.name().to_string(),
        Color::White => white.name().to_string(),
    };
    black.close_episode(&winner_name);
    white.close_episode(&winner_name);

    let outcome = EpisodeOutcome {
        winner,
        winner_name,
        moves,
        duration: start.elapsed(),
    };
    debug!(winner = %outcome.winner, moves = outcome.moves, "episode finished");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{MctsAgent, RandomAgent};
    use engine_core::AgentOptions;

    fn random_agent(role: &str, seed: u64) -> RandomAgent {
        let opts =
            AgentOptions::parse(&format!("name=random role={role} seed={seed}")).unwrap();
        RandomAgent::from_options(NoGo::standard(), &opts).unwrap()
    }

    #[test]
    fn random_vs_random_terminates() {
        let game = NoGo::standard();
        let mut black = random_agent("black", 1);
        let mut white = random_agent("white", 2);
        let outcome = run_episode(&game, &mut black, &mut white);

        // 73 playable cells bound the episode length; both sides must have
        // placed at least one stone before anyone can be stuck
        assert!(outcome.moves >= 2);
        assert!(outcome.moves <= 73);
        assert_eq!(outcome.winner_name, "random");
    }

    #[test]
    fn seeded_episode_is_reproducible() {
        let game = NoGo::standard();
        let first = run_episode(
            &game,
            &mut random_agent("black", 10),
            &mut random_agent("white", 20),
        );
        let second = run_episode(
            &game,
            &mut random_agent("black", 10),
            &mut random_agent("white", 20),
        );
        assert_eq!(first.winner, second.winner);
        assert_eq!(first.moves, second.moves);
    }

    #[test]
    fn mcts_vs_random_terminates() {
        let game = NoGo::standard();
        let opts = AgentOptions::parse("name=mcts role=black simulation=20 seed=3").unwrap();
        let mut black = MctsAgent::from_options(NoGo::standard(), &opts).unwrap();
        let mut white = random_agent("white", 4);
        let outcome = run_episode(&game, &mut black, &mut white);
        assert!(outcome.moves >= 2);
    }
}
