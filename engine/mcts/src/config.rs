//! Search configuration.

use std::time::Duration;

/// How long one `search` call may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBudget {
    /// Exactly this many select/expand/simulate/backpropagate iterations.
    /// Deterministic given a fixed seed.
    Iterations(u32),
    /// Iterate until this much wall-clock time has elapsed.
    WallClock(Duration),
}

/// Maps a move index (0-based within an episode) to a budget, so callers
/// can spend less time on forced early moves and more in the midgame.
pub type BudgetPolicy = dyn Fn(u32) -> SearchBudget + Send + Sync;

/// Tuning parameters for selection.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// UCT exploration constant (the `C` in `C * sqrt(ln N / (n + 1))`).
    pub exploration: f64,
    /// Blend RAVE statistics into the exploitation term.
    pub rave: bool,
    /// RAVE bias `b`; larger values trust RAVE for fewer visits.
    pub rave_bias: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration: 1.414,
            rave: false,
            rave_bias: 0.025,
        }
    }
}

impl MctsConfig {
    /// Small exploration-heavy configuration for unit tests.
    pub fn for_testing() -> Self {
        Self::default()
    }

    pub fn with_exploration(mut self, exploration: f64) -> Self {
        self.exploration = exploration;
        self
    }

    pub fn with_rave(mut self, rave_bias: f64) -> Self {
        self.rave = true;
        self.rave_bias = rave_bias;
        self
    }
}
