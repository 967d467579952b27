//! Roster shaping settings.
//!
//! The damage formula's level and move power are fixed constants in
//! [`crate::battle::calculators`]; only the way raw species data is turned
//! into combatants and teams is configurable.

use crate::errors::{BattleEngineError, BattleResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Members beyond this are dropped when a team is built.
    pub max_team_size: usize,
    /// Only the first `max_moves` moves of a species are kept.
    pub max_moves: usize,
    /// Base HP used when the source data has no `hp` entry.
    pub fallback_hp: u32,
    /// Attack/defense used when the source data has no entry for them.
    pub fallback_stat: u32,
    /// Random opponents field at least this many members.
    pub min_random_team_size: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_team_size: 6,
            max_moves: 4,
            fallback_hp: 100,
            fallback_stat: 50,
            min_random_team_size: 3,
        }
    }
}

impl BattleConfig {
    /// Parse a RON document. Missing fields keep their defaults.
    pub fn from_ron_str(content: &str) -> BattleResult<Self> {
        let config: BattleConfig =
            ron::from_str(content).map_err(|e| BattleEngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a RON config file from disk.
    pub fn load(path: &Path) -> BattleResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BattleEngineError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_ron_str(&content)
    }

    /// Level-50 max HP: twice the base stat plus 100.
    pub fn max_hp_for(&self, base_hp: Option<u32>) -> u32 {
        base_hp.unwrap_or(self.fallback_hp) * 2 + 100
    }

    fn validate(&self) -> BattleResult<()> {
        if self.max_team_size == 0 {
            return Err(BattleEngineError::Config("max_team_size must be > 0".to_string()));
        }
        if self.max_moves == 0 {
            return Err(BattleEngineError::Config("max_moves must be > 0".to_string()));
        }
        if self.fallback_stat == 0 {
            return Err(BattleEngineError::Config("fallback_stat must be > 0".to_string()));
        }
        Ok(())
    }
}
