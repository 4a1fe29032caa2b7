use serde::{Deserialize, Serialize};

use crate::utils::{get_env, get_env_parsed};

pub const LOG_LEVEL_ENV: &str = "FOURIER_LOG_LEVEL";
pub const BENCH_SIZE_ENV: &str = "FOURIER_BENCH_SIZE";
pub const BENCH_SEED_ENV: &str = "FOURIER_BENCH_SEED";

const DEFAULT_BENCH_SIZE: usize = 4096;
const DEFAULT_BENCH_SEED: u64 = 42;

/// Settings read from the environment. Command-line flags override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub log_level: String,
    pub bench_size: usize,
    pub bench_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            bench_size: DEFAULT_BENCH_SIZE,
            bench_seed: DEFAULT_BENCH_SEED,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            log_level: get_env(LOG_LEVEL_ENV, Some(&defaults.log_level)),
            bench_size: get_env_parsed(BENCH_SIZE_ENV, defaults.bench_size),
            bench_seed: get_env_parsed(BENCH_SEED_ENV, defaults.bench_seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bench_size, 4096);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_serializes() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("\"bench_size\":4096"));
    }
}
