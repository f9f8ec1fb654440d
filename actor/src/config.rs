//! Configuration for the self-play runner.
//!
//! CLI arguments take highest priority; a few defaults can be overridden
//! through `NOGO_*` environment variables.

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

fn default_episodes() -> u32 {
    std::env::var("NOGO_EPISODES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(100)
}

fn default_log_level() -> String {
    std::env::var("NOGO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

#[derive(Parser, Debug, Clone)]
#[command(name = "actor")]
#[command(about = "Hollow NoGo self-play episode runner")]
#[command(long_about = "Runs self-play episodes between two configurable agents \
(random or MCTS) and reports aggregate statistics.

Agents are specified as key=value lists, e.g.:
  --black \"name=mcts role=black simulation=1000\"
  --white \"name=random role=white\"")]
pub struct Config {
    /// Number of episodes to play
    #[arg(long, default_value_t = default_episodes())]
    pub episodes: u32,

    /// Black agent spec (key=value list)
    #[arg(long, default_value = "name=mcts role=black")]
    pub black: String,

    /// White agent spec (key=value list)
    #[arg(long, default_value = "name=random role=white")]
    pub white: String,

    /// Master random seed; 0 seeds from entropy
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Log progress every N episodes (0 to disable)
    #[arg(long, default_value_t = 10)]
    pub log_interval: u32,

    /// Write a JSON stats snapshot here after the run
    #[arg(long)]
    pub stats_path: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.episodes == 0 {
            return Err(anyhow!("episodes must be greater than 0"));
        }

        if self.black.is_empty() {
            return Err(anyhow!("black agent spec cannot be empty"));
        }

        if self.white.is_empty() {
            return Err(anyhow!("white agent spec cannot be empty"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            episodes: 10,
            black: "name=mcts role=black".into(),
            white: "name=random role=white".into(),
            seed: 0,
            log_level: "info".into(),
            log_interval: 10,
            stats_path: None,
        }
    }

    #[test]
    fn validate_accepts_valid_configuration() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_episodes() {
        let mut cfg = base_config();
        cfg.episodes = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("episodes"));
    }

    #[test]
    fn validate_rejects_empty_agent_spec() {
        let mut cfg = base_config();
        cfg.black.clear();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("black"));
    }

    #[test]
    fn validate_rejects_invalid_log_level() {
        let mut cfg = base_config();
        cfg.log_level = "nope".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }
}
