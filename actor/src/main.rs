//! Self-play runner for Hollow NoGo.
//!
//! Builds the two agents from their `key=value` specs, plays the requested
//! number of episodes, and logs aggregate results. With `--stats-path` the
//! final totals are also written as a JSON report.

mod agents;
mod config;
mod episode;
mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use games_nogo::NoGo;
use stats::SelfPlayStats;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("actor={level},mcts={level}")));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level);

    info!(
        episodes = config.episodes,
        black = %config.black,
        white = %config.white,
        "starting self-play"
    );

    let game = NoGo::standard();
    let mut black = agents::build_agent(&config.black).context("building black agent")?;
    let mut white = agents::build_agent(&config.white).context("building white agent")?;

    if config.seed != 0 {
        // decorrelate the two agents while keeping the run reproducible
        black
            .notify("seed", &config.seed.to_string())
            .context("seeding black agent")?;
        white
            .notify("seed", &(config.seed ^ 0x9e37_79b9_7f4a_7c15).to_string())
            .context("seeding white agent")?;
    }

    let mut stats = SelfPlayStats::default();
    for n in 1..=config.episodes {
        let outcome = episode::run_episode(&game, black.as_mut(), white.as_mut());
        stats.record(&outcome);

        if config.log_interval > 0 && n % config.log_interval == 0 {
            let snap = stats.snapshot();
            info!(
                episode = n,
                black_wins = snap.black_wins,
                white_wins = snap.white_wins,
                black_win_rate = format!("{:.3}", snap.black_win_rate),
                avg_moves = format!("{:.1}", snap.avg_moves),
                "progress"
            );
        }
    }

    let snap = stats.snapshot();
    info!(
        episodes = snap.episodes,
        black_wins = snap.black_wins,
        white_wins = snap.white_wins,
        black_win_rate = format!("{:.3}", snap.black_win_rate),
        avg_moves = format!("{:.1}", snap.avg_moves),
        episodes_per_sec = format!("{:.2}", snap.episodes_per_sec),
        "self-play finished"
    );

    if let Some(path) = &config.stats_path {
        stats.save(path)?;
        info!(path = %path.display(), "stats written");
    }

    Ok(())
}
