//! Aggregate self-play statistics.

use crate::episode::EpisodeOutcome;
use anyhow::{Context, Result};
use games_nogo::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Running totals across a batch of episodes.
#[derive(Debug, Default, Clone)]
pub struct SelfPlayStats {
    episodes: u32,
    black_wins: u32,
    white_wins: u32,
    total_moves: u64,
    total_time: Duration,
}

/// Point-in-time view of the totals, written as the JSON report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSnapshot {
    pub episodes: u32,
    pub black_wins: u32,
    pub white_wins: u32,
    pub black_win_rate: f64,
    pub avg_moves: f64,
    pub episodes_per_sec: f64,
    pub timestamp_secs: u64,
}

impl SelfPlayStats {
    pub fn record(&mut self, outcome: &EpisodeOutcome) {
        self.episodes += 1;
        match outcome.winner {
            Color::Black => self.black_wins += 1,
            Color::White => self.white_wins += 1,
        }
        self.total_moves += u64::from(outcome.moves);
        self.total_time += outcome.duration;
    }

    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    pub fn black_wins(&self) -> u32 {
        self.black_wins
    }

    pub fn white_wins(&self) -> u32 {
        self.white_wins
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let episodes = f64::from(self.episodes);
        let secs = self.total_time.as_secs_f64();
        StatsSnapshot {
            episodes: self.episodes,
            black_wins: self.black_wins,
            white_wins: self.white_wins,
            black_win_rate: if self.episodes > 0 {
                f64::from(self.black_wins) / episodes
            } else {
                0.0
            },
            avg_moves: if self.episodes > 0 {
                self.total_moves as f64 / episodes
            } else {
                0.0
            },
            episodes_per_sec: if secs > 0.0 { episodes / secs } else { 0.0 },
            timestamp_secs: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    /// Write the snapshot as pretty JSON, via a temp file so readers never
    /// observe a partial report.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.snapshot())
            .context("failed to serialize stats snapshot")?;
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, json)
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, path)
            .with_context(|| format!("failed to rename {} to {}", tmp.display(), path.display()))?;
        Ok(())
    }
}
