//! Runtime configuration read from `BLOCKFALL_*` environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::types::FRAME_MS;

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_FRAME_MS: &str = "BLOCKFALL_FRAME_MS";
pub const ENV_MUTE: &str = "BLOCKFALL_MUTE";
pub const ENV_DROP_BELL: &str = "BLOCKFALL_DROP_BELL";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";
pub const ENV_LOG: &str = "BLOCKFALL_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: expected {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Piece source seed; `None` picks one from the clock at startup.
    pub seed: Option<u32>,
    pub frame_ms: u32,
    pub muted: bool,
    /// Ring the bell on hard drops as well.
    pub drop_bell: bool,
    /// Tracing output file. No file, no logging (stdout is the game screen).
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS,
            muted: false,
            drop_bell: true,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let mut config = Config::default();

        if let Some(raw) = get(ENV_SEED) {
            let seed = raw.parse::<u32>().map_err(|_| invalid(ENV_SEED, &raw, "an unsigned 32-bit integer"))?;
            config.seed = Some(seed);
        }

        if let Some(raw) = get(ENV_FRAME_MS) {
            config.frame_ms = raw
                .parse::<u32>()
                .ok()
                .filter(|ms| (1..=1000).contains(ms))
                .ok_or_else(|| invalid(ENV_FRAME_MS, &raw, "milliseconds in 1..=1000"))?;
        }

        if let Some(raw) = get(ENV_MUTE) {
            config.muted = parse_flag(ENV_MUTE, &raw)?;
        }
        if let Some(raw) = get(ENV_DROP_BELL) {
            config.drop_bell = parse_flag(ENV_DROP_BELL, &raw)?;
        }

        config.log_path = get(ENV_LOG_PATH).map(PathBuf::from);
        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(1);
            // Fold the high bits in so consecutive launches differ.
            (nanos ^ (nanos >> 32)) as u32
        })
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(var, raw, "1/0 or true/false")),
    }
}

fn invalid(var: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.frame_ms, 16);
        assert!(config.drop_bell);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            (ENV_SEED, "42"),
            (ENV_FRAME_MS, "33"),
            (ENV_MUTE, "true"),
            (ENV_DROP_BELL, "off"),
            (ENV_LOG_PATH, " /tmp/blockfall.log "),
            (ENV_LOG, "blockfall_core=debug"),
        ]))
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.seed_or_clock(), 42);
        assert_eq!(config.frame_ms, 33);
        assert!(config.muted);
        assert!(!config.drop_bell);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
        assert_eq!(config.log_filter, "blockfall_core=debug");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_lookup(lookup(&[(ENV_SEED, "  "), (ENV_LOG_PATH, "")])).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Config::from_lookup(lookup(&[(ENV_SEED, "-3")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: ENV_SEED, .. }));

        let err = Config::from_lookup(lookup(&[(ENV_FRAME_MS, "0")])).unwrap_err();
        assert!(err.to_string().contains("BLOCKFALL_FRAME_MS"));

        assert!(Config::from_lookup(lookup(&[(ENV_FRAME_MS, "1001")])).is_err());
        assert!(Config::from_lookup(lookup(&[(ENV_MUTE, "loud")])).is_err());

        let err = Config::from_lookup(lookup(&[(ENV_DROP_BELL, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: ENV_DROP_BELL, .. }));
    }
}
