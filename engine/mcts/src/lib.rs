//! Monte Carlo Tree Search
//!
//! Single-threaded MCTS over any [`engine_core::Game`], with UCT selection
//! optionally blended with RAVE statistics, uniformly random rollouts, and
//! a budgeted search loop.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                   MctsSearch                   │
//! │  (fresh tree per call, budget loop, best move) │
//! └──────────────────────┬─────────────────────────┘
//!                        │
//! ┌──────────────────────▼─────────────────────────┐
//! │                   SearchTree                   │
//! │  (arena nodes, selection, expansion, backprop) │
//! └──────────┬───────────────────────────┬─────────┘
//!            │                           │
//! ┌──────────▼──────────┐     ┌──────────▼─────────┐
//! │     SearchNode      │     │      rollout       │
//! │ (integer statistics)│     │ (random playouts)  │
//! └─────────────────────┘     └────────────────────┘
//! ```
//!
//! Every `search` call builds a tree rooted at the given board, runs
//! select → expand → simulate → backpropagate iterations until the budget
//! expires, recommends the most-visited root child, and drops the whole
//! tree. Nothing survives between calls except the seedable RNG state.

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

pub use config::{BudgetPolicy, MctsConfig, SearchBudget};
pub use node::{NodeId, SearchNode};
pub use rollout::{rollout, Rollout};
pub use search::{MctsSearch, SearchError};
pub use tree::SearchTree;
