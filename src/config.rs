//! Environment configuration for the binaries.

use std::env;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

/// Demo fall interval when `TETRIS_BOARD_TICK_MS` is unset.
pub const DEFAULT_TICK_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub tick_ms: u64,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_ms: DEFAULT_TICK_MS,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from `TETRIS_BOARD_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup. Missing, unparseable or zero numbers fall
    /// back to the defaults; a blank log path disables file logging.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let positive = |key: &str| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|&n| n > 0)
        };

        let rows = positive("TETRIS_BOARD_ROWS").map_or(DEFAULT_ROWS, |n| n as usize);
        let cols = positive("TETRIS_BOARD_COLS").map_or(DEFAULT_COLS, |n| n as usize);
        let tick_ms = positive("TETRIS_BOARD_TICK_MS").unwrap_or(DEFAULT_TICK_MS);

        let log_path = lookup("TETRIS_BOARD_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            rows,
            cols,
            tick_ms,
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_from(&[
            ("TETRIS_BOARD_ROWS", "12"),
            ("TETRIS_BOARD_COLS", " 8 "),
            ("TETRIS_BOARD_TICK_MS", "100"),
            ("TETRIS_BOARD_LOG_PATH", "/tmp/board.log"),
        ]);
        assert_eq!(cfg.rows, 12);
        assert_eq!(cfg.cols, 8);
        assert_eq!(cfg.tick_ms, 100);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/board.log"));
    }

    #[test]
    fn zero_and_garbage_fall_back() {
        let cfg = config_from(&[
            ("TETRIS_BOARD_ROWS", "0"),
            ("TETRIS_BOARD_COLS", "wide"),
            ("TETRIS_BOARD_LOG_PATH", "   "),
        ]);
        assert_eq!(cfg.rows, DEFAULT_ROWS);
        assert_eq!(cfg.cols, DEFAULT_COLS);
        assert_eq!(cfg.log_path, None);
    }
}
