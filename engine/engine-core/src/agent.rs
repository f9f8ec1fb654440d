//! Agent contract
//!
//! Agents are decision makers driven by the episode runner. The contract
//! mirrors the classic self-play framing: an agent is told when an episode
//! opens and closes, is asked for a move given the current board, and can
//! be reconfigured at runtime through `notify` key/value messages.

use crate::game::Game;
use thiserror::Error;

/// Errors raised while constructing or reconfiguring an agent.
///
/// Configuration errors are fatal: an agent with an invalid role or name
/// must fail at construction rather than default silently.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// A player of game `G`.
pub trait Agent<G: Game> {
    /// Display name used in episode tags and reports.
    fn name(&self) -> &str;

    /// The role this agent was constructed for (e.g. "black", "white").
    fn role(&self) -> &str;

    /// Called once before the first move of an episode.
    fn open_episode(&mut self, _flag: &str) {}

    /// Called once after an episode ends; `flag` names the winner.
    fn close_episode(&mut self, _flag: &str) {}

    /// Decide on a move for the given board. Implementations return their
    /// game's no-move sentinel when nothing legal is available.
    fn take_action(&mut self, board: &G::Board) -> G::Move;

    /// Runtime reconfiguration. Unknown keys are ignored; known keys with
    /// malformed values are rejected.
    fn notify(&mut self, key: &str, value: &str) -> Result<(), AgentError> {
        let _ = (key, value);
        Ok(())
    }
}
