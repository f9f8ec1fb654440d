//! Agent implementations for Hollow NoGo.
//!
//! Two players are provided: a uniformly random agent and the MCTS agent.
//! Both are built from a `key=value` option bag and fail fast on an
//! invalid role or name. Dispatch happens on the `name` key, matching the
//! classic framework convention.

use anyhow::Result;
use engine_core::{Agent, AgentError, AgentOptions, Game, OptionsError};
use games_nogo::{Board, Color, Move, NoGo};
use mcts::{BudgetPolicy, MctsConfig, MctsSearch, SearchBudget};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::time::Duration;
use tracing::error;

/// Default per-move wall-clock budget for the MCTS agent.
const DEFAULT_BUDGET: Duration = Duration::from_millis(800);

/// Characters that would break episode tags and reports.
const FORBIDDEN_NAME_CHARS: &str = "[]():; ";

/// Build an agent from a `key=value` spec, dispatching on `name`.
/// `name=mcts` selects the search agent; anything else plays randomly.
pub fn build_agent(spec: &str) -> Result<Box<dyn Agent<NoGo>>> {
    let opts = AgentOptions::parse(spec)?;
    let game = NoGo::standard();
    let agent: Box<dyn Agent<NoGo>> = match opts.get("name") {
        Some("mcts") => Box::new(MctsAgent::from_options(game, &opts)?),
        _ => Box::new(RandomAgent::from_options(game, &opts)?),
    };
    Ok(agent)
}

fn parse_role(opts: &AgentOptions) -> Result<Color, AgentError> {
    match opts.get("role") {
        Some("black") => Ok(Color::Black),
        Some("white") => Ok(Color::White),
        other => Err(AgentError::InvalidRole(
            other.unwrap_or("unknown").to_string(),
        )),
    }
}

fn validate_name(name: &str) -> Result<(), AgentError> {
    if name.is_empty() || name.chars().any(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        return Err(AgentError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn to_agent_error(err: OptionsError) -> AgentError {
    match err {
        OptionsError::Invalid { key, value } => AgentError::InvalidValue { key, value },
        OptionsError::Malformed(raw) => AgentError::InvalidValue {
            key: raw,
            value: String::new(),
        },
    }
}

fn role_str(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::White => "white",
    }
}

/// Plays a uniformly random legal move; passes when stuck.
pub struct RandomAgent {
    name: String,
    color: Color,
    game: NoGo,
    rng: ChaCha20Rng,
}

impl RandomAgent {
    pub fn from_options(game: NoGo, opts: &AgentOptions) -> Result<Self, AgentError> {
        let name = opts.get("name").unwrap_or("random").to_string();
        validate_name(&name)?;
        let color = parse_role(opts)?;
        let rng = match opts.get_parsed::<u64>("seed").map_err(to_agent_error)? {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Ok(Self {
            name,
            color,
            game,
            rng,
        })
    }
}

impl Agent<NoGo> for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> &str {
        role_str(self.color)
    }

    fn take_action(&mut self, board: &Board) -> Move {
        let mut candidates = self.game.candidate_moves(board);
        candidates.shuffle(&mut self.rng);
        for mv in candidates {
            let mut scratch = board.clone();
            if self.game.apply(&mut scratch, mv) {
                return mv;
            }
        }
        self.game.no_move(board)
    }

    fn notify(&mut self, key: &str, value: &str) -> Result<(), AgentError> {
        if key == "seed" {
            let seed: u64 = value.parse().map_err(|_| AgentError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            })?;
            self.rng = ChaCha20Rng::seed_from_u64(seed);
        }
        Ok(())
    }
}

/// The strongest agent: one fresh MCTS per move.
pub struct MctsAgent {
    name: String,
    color: Color,
    search: MctsSearch<NoGo>,
}

impl MctsAgent {
    pub fn from_options(game: NoGo, opts: &AgentOptions) -> Result<Self, AgentError> {
        let name = opts.get("name").unwrap_or("mcts").to_string();
        validate_name(&name)?;
        let color = parse_role(opts)?;

        let mut config = MctsConfig::default();
        if let Some(exploration) = opts
            .get_parsed::<f64>("exploration")
            .map_err(to_agent_error)?
        {
            config = config.with_exploration(exploration);
        }
        if let Some(bias) = opts.get_parsed::<f64>("rave").map_err(to_agent_error)? {
            config = config.with_rave(bias);
        }

        let budget = match (
            opts.get_parsed::<u32>("simulation").map_err(to_agent_error)?,
            opts.get_parsed::<u64>("budget_ms").map_err(to_agent_error)?,
        ) {
            (Some(iterations), _) => SearchBudget::Iterations(iterations),
            (None, Some(ms)) => SearchBudget::WallClock(Duration::from_millis(ms)),
            (None, None) => SearchBudget::WallClock(DEFAULT_BUDGET),
        };

        let policy: Box<BudgetPolicy> = Box::new(move |_| budget);
        let search = match opts.get_parsed::<u64>("seed").map_err(to_agent_error)? {
            Some(seed) => MctsSearch::with_seed(game, config, policy, seed),
            None => MctsSearch::new(game, config, policy),
        };

        Ok(Self {
            name,
            color,
            search,
        })
    }
}

impl Agent<NoGo> for MctsAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> &str {
        role_str(self.color)
    }

    fn open_episode(&mut self, _flag: &str) {
        self.search.start_new_episode();
    }

    fn take_action(&mut self, board: &Board) -> Move {
        match self.search.search(board) {
            Ok(mv) => mv,
            Err(err) => {
                // only reachable with a non-deterministic game; forfeit
                error!(%err, "search failed, passing");
                self.search.game().no_move(board)
            }
        }
    }

    fn notify(&mut self, key: &str, value: &str) -> Result<(), AgentError> {
        let invalid = || AgentError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "seed" => {
                let seed: u64 = value.parse().map_err(|_| invalid())?;
                self.search.reseed(seed);
            }
            "simulation" => {
                let iterations: u32 = value.parse().map_err(|_| invalid())?;
                self.search
                    .set_budget(Box::new(move |_| SearchBudget::Iterations(iterations)));
            }
            "budget_ms" => {
                let ms: u64 = value.parse().map_err(|_| invalid())?;
                self.search.set_budget(Box::new(move |_| {
                    SearchBudget::WallClock(Duration::from_millis(ms))
                }));
            }
            _ => {}
        }
        Ok(())
    }
}
