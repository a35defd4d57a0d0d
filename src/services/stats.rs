// src/services/stats.rs
use log::warn;

use crate::config::AnalysisConfig;
use crate::models::{DegeneracyFlags, DivergenceStats, MergedPoint};

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

// Population standard deviation: the window is the whole population being
// described, so the denominator is n, not n - 1.
fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

// `None` marks degenerate input: an empty pair set or zero variance on
// either side.
fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.is_empty() {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        None
    } else {
        Some(cov / denom)
    }
}

fn forward_correlation(
    merged: &[MergedPoint],
    config: &AnalysisConfig,
    flags: &mut DegeneracyFlags,
) -> f64 {
    let lag = config.lag_days;
    let min_samples = config.min_correlation_samples;

    if merged.len() < lag + min_samples {
        warn!(
            "window of {} merged points is too short for a {}-step lagged correlation",
            merged.len(),
            lag
        );
        flags.insufficient_sample = true;
        return 0.0;
    }

    // Pair each divergence with the price `lag` steps ahead, skipping
    // points that predate the first available price.
    let mut divergences = Vec::new();
    let mut lagged_prices = Vec::new();
    for i in 0..merged.len() - lag {
        if let Some(price) = merged[i + lag].price_as_of {
            divergences.push(merged[i].sentiment.divergence);
            lagged_prices.push(price);
        }
    }

    if divergences.len() < min_samples {
        warn!(
            "only {} aligned divergence/price pairs, need {} for a correlation",
            divergences.len(),
            min_samples
        );
        flags.insufficient_sample = true;
        return 0.0;
    }

    match pearson_correlation(&divergences, &lagged_prices) {
        Some(correlation) => correlation,
        None => {
            flags.zero_variance = true;
            0.0
        }
    }
}

/// Summarize a merged window. Never fails: every degenerate input (empty
/// window, too few samples, zero variance) produces the neutral value 0.0
/// and sets the matching flag, so the caller can tell a defaulted
/// statistic from a genuine zero.
pub fn divergence_stats(merged: &[MergedPoint], config: &AnalysisConfig) -> DivergenceStats {
    let mut flags = DegeneracyFlags::default();

    let divergences: Vec<f64> = merged.iter().map(|m| m.sentiment.divergence).collect();
    let current = match merged.last() {
        Some(point) => point.sentiment.divergence,
        None => {
            flags.empty_window = true;
            0.0
        }
    };
    let mean_divergence = mean(&divergences);
    let volatility = population_std_dev(&divergences, mean_divergence);
    let forward_correlation = forward_correlation(merged, config, &mut flags);

    DivergenceStats {
        current,
        mean: mean_divergence,
        volatility,
        forward_correlation,
        lag_days: config.lag_days,
        flags,
    }
}
