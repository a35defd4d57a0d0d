// src/models.rs
use serde::{Serialize, Deserialize};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;

/// Unordered field bag delivered by an upstream sentiment source. Key
/// spellings vary between sources; `services::canonical` resolves them
/// against the accepted synonym table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSentimentRecord(pub HashMap<String, Value>);

impl RawSentimentRecord {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// One day of canonical sentiment. `fed` and `boc` are already rounded to
/// two decimals, so `divergence` is exactly their difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub date: NaiveDate,
    pub fed: f64,
    pub boc: f64,
    pub divergence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    Fed,
    Boc,
}

/// A single bank-tagged sentiment observation, before densification onto
/// the daily axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BankObservation {
    pub date: NaiveDate,
    pub bank: Bank,
    pub score: f64,
}

/// Daily close of the tracked currency pair. The series may have gaps
/// (non-trading days) and a different cadence than the sentiment series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// A sentiment point joined with the most recent price dated at or before
/// it. `None` only before the first available price date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MergedPoint {
    pub sentiment: SentimentPoint,
    pub price_as_of: Option<f64>,
}

/// Which degenerate inputs were defaulted to the neutral value, so a
/// consumer can tell a genuine zero from a defaulted one.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DegeneracyFlags {
    pub empty_window: bool,
    pub insufficient_sample: bool,
    pub zero_variance: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DivergenceStats {
    pub current: f64,
    pub mean: f64,
    pub volatility: f64,
    pub forward_correlation: f64,
    pub lag_days: usize,
    pub flags: DegeneracyFlags,
}

/// Per-sentence output of the external scoring oracle. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceScore {
    pub text: String,
    pub stance: f64,
    pub impact: f64,
    pub topic: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StanceLabel {
    Hawkish,
    Neutral,
    Dovish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignalDirection {
    FedDominant,
    BocDominant,
}

/// Inclusive date filter. The presentation layer owns the current filter
/// and re-invokes the pipeline with it on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    All,
    Range { start: NaiveDate, end: NaiveDate },
}

impl Window {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Window::All => true,
            Window::Range { start, end } => date >= start && date <= end,
        }
    }
}
