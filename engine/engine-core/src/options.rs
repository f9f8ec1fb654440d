//! Agent option bags
//!
//! Agents are constructed from whitespace-separated `key=value` pairs
//! (e.g. `"name=mcts role=black simulation=1000"`). The bag keeps raw
//! strings and offers typed lookups so each agent decides which keys it
//! understands.

use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("malformed option '{0}', expected key=value")]
    Malformed(String),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
}

/// Parsed `key=value` option bag.
#[derive(Debug, Clone, Default)]
pub struct AgentOptions {
    entries: HashMap<String, String>,
}

impl AgentOptions {
    /// Parse a whitespace-separated list of `key=value` pairs.
    /// Later occurrences of a key overwrite earlier ones.
    pub fn parse(args: &str) -> Result<Self, OptionsError> {
        let mut entries = HashMap::new();
        for pair in args.split_whitespace() {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| OptionsError::Malformed(pair.to_string()))?;
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(Self { entries })
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Typed lookup: `Ok(None)` when the key is absent, `Err` when present
    /// but unparsable.
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, OptionsError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| OptionsError::Invalid {
                key: key.to_string(),
                value: raw.clone(),
            }),
        }
    }
}
