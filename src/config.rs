// src/config.rs
use dotenv::dotenv;
use log::warn;
use std::env;

/// Tunables for the statistics engine.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisConfig {
    /// Forward lag, in series steps, between divergence and price.
    pub lag_days: usize,
    /// Minimum aligned (divergence, price) pairs before a correlation is
    /// reported instead of the neutral value.
    pub min_correlation_samples: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            lag_days: 1,
            min_correlation_samples: 11,
        }
    }
}

impl AnalysisConfig {
    /// Read overrides from the environment, defaulting loudly when a
    /// variable is unset or unparseable.
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = AnalysisConfig::default();

        let lag_days = read_env_usize("DIVERGENCE_LAG_DAYS", defaults.lag_days);
        let min_correlation_samples =
            read_env_usize("DIVERGENCE_MIN_SAMPLES", defaults.min_correlation_samples);

        AnalysisConfig {
            lag_days,
            min_correlation_samples,
        }
    }
}

fn read_env_usize(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} must be a number, got {:?}; defaulting to {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
