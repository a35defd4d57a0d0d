// src/services/pipeline.rs
use log::info;

use crate::config::AnalysisConfig;
use crate::models::{
    DivergenceStats, MergedPoint, PricePoint, SentimentPoint, SignalDirection, Window,
};
use crate::services::align::merge_with_prices;
use crate::services::stats::divergence_stats;

/// Filter both series to the window, align them, and summarize.
///
/// Pure and stateless: the presentation layer owns the current filter and
/// re-invokes this on every change. The sentiment input must be ascending
/// by date (window filtering preserves order).
pub fn align_and_summarize(
    sentiment: &[SentimentPoint],
    prices: &[PricePoint],
    window: &Window,
    config: &AnalysisConfig,
) -> (Vec<MergedPoint>, DivergenceStats) {
    let windowed_sentiment: Vec<SentimentPoint> = sentiment
        .iter()
        .filter(|point| window.contains(point.date))
        .copied()
        .collect();
    let windowed_prices: Vec<PricePoint> = prices
        .iter()
        .filter(|point| window.contains(point.date))
        .copied()
        .collect();

    info!(
        "summarizing {} sentiment points against {} price points",
        windowed_sentiment.len(),
        windowed_prices.len()
    );

    let merged = merge_with_prices(&windowed_sentiment, &windowed_prices);
    let stats = divergence_stats(&merged, config);
    (merged, stats)
}

/// Direction of the latest reading: a positive divergence means the Fed is
/// the more hawkish bank, which favors USD over CAD.
pub fn latest_signal(stats: &DivergenceStats) -> SignalDirection {
    if stats.current > 0.0 {
        SignalDirection::FedDominant
    } else {
        SignalDirection::BocDominant
    }
}
