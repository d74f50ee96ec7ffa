//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI_HAZARDS_LEVEL` | `corridor` | Built-in level to play |
//! | `TUI_HAZARDS_LOG` | unset | Log file path; logging is off when unset |
//! | `TUI_HAZARDS_CELL_WIDTH` | `1` | Terminal columns per grid cell |
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{catalog, LevelDef};
use crate::term::MAX_CELL_WIDTH;

pub const LEVEL_VAR: &str = "TUI_HAZARDS_LEVEL";
pub const LOG_VAR: &str = "TUI_HAZARDS_LOG";
pub const CELL_WIDTH_VAR: &str = "TUI_HAZARDS_CELL_WIDTH";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("TUI_HAZARDS_CELL_WIDTH must be an integer in 1..={max}, got {value:?}")]
    InvalidCellWidth { value: String, max: u16 },
    #[error("unknown level {name:?} (available: {available})")]
    UnknownLevel { name: String, available: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub level: String,
    pub log_path: Option<PathBuf>,
    pub cell_width: u16,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            level: catalog::DEFAULT_LEVEL.to_string(),
            log_path: None,
            cell_width: 1,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(level) = get(LEVEL_VAR) {
            config.level = level.trim().to_string();
        }
        config.log_path = get(LOG_VAR).map(PathBuf::from);
        if let Some(raw) = get(CELL_WIDTH_VAR) {
            config.cell_width = raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|w| (1..=MAX_CELL_WIDTH).contains(w))
                .ok_or(ConfigError::InvalidCellWidth {
                    value: raw,
                    max: MAX_CELL_WIDTH,
                })?;
        }

        config.level_def()?;
        Ok(config)
    }

    /// The built-in level this config selects.
    pub fn level_def(&self) -> Result<&'static LevelDef, ConfigError> {
        catalog::find(&self.level).ok_or_else(|| ConfigError::UnknownLevel {
            name: self.level.clone(),
            available: catalog::BUILTIN_LEVELS
                .iter()
                .map(|l| l.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = RunConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.level_def().unwrap().name, "corridor");
    }

    #[test]
    fn reads_every_variable() {
        let config = RunConfig::from_lookup(lookup(&[
            (LEVEL_VAR, "Snake"),
            (LOG_VAR, "/tmp/hazards.log"),
            (CELL_WIDTH_VAR, " 2 "),
        ]))
        .unwrap();
        assert_eq!(config.level_def().unwrap().name, "snake");
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/hazards.log")));
        assert_eq!(config.cell_width, 2);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = RunConfig::from_lookup(lookup(&[(LEVEL_VAR, "  "), (LOG_VAR, "")])).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn rejects_bad_cell_width() {
        for bad in ["0", "4", "wide"] {
            let err = RunConfig::from_lookup(lookup(&[(CELL_WIDTH_VAR, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidCellWidth { .. }), "{}", bad);
        }
    }

    #[test]
    fn rejects_unknown_level_and_lists_choices() {
        let err = RunConfig::from_lookup(lookup(&[(LEVEL_VAR, "maze")])).unwrap_err();
        assert_eq!(err.to_string(), "unknown level \"maze\" (available: corridor, bombs, snake)");
    }
}
