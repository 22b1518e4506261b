//! Runner configuration read from the environment.
//!
//! - `MEMORY_MATCH_SEED`: shuffle seed (random when unset)
//! - `MEMORY_MATCH_TICK_MS`: frame interval in milliseconds (default 16)
//! - `MEMORY_MATCH_LOG_PATH`: write logs to this file (logging is off when unset)

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u32>,
    pub tick_ms: u32,
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; unparsable values fall back to defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("MEMORY_MATCH_SEED").and_then(|s| s.trim().parse().ok());

        let tick_ms = lookup("MEMORY_MATCH_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_MS);

        let log_path = lookup("MEMORY_MATCH_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tick_ms,
            log_path,
        }
    }

    /// Configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}
