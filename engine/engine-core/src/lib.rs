//! Core traits and types for the self-play engine
//!
//! This crate provides the fundamental abstractions shared by the game
//! crates, the search, and the episode runner:
//! - `Game`: typed trait describing board and move semantics
//! - `Agent`: the contract every player implementation fulfills
//! - `AgentOptions`: the `key=value` property bag agents are built from

pub mod agent;
pub mod game;
pub mod options;

// Re-export main types for convenience
pub use agent::{Agent, AgentError};
pub use game::Game;
pub use options::{AgentOptions, OptionsError};
