// src/services/canonical.rs
use chrono::NaiveDate;
use log::debug;
use serde_json::Value;

use crate::models::{RawSentimentRecord, SentimentPoint};

// Accepted key spellings, probed in order; the first present key wins.
// Matching is exact, not case-insensitive.
const FED_KEYS: [&str; 2] = ["Fed", "fed"];
const BOC_KEYS: [&str; 2] = ["BoC", "boc"];
const DATE_KEY: &str = "date";

fn resolve_score(record: &RawSentimentRecord, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| record.field(key))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

fn resolve_date(record: &RawSentimentRecord) -> Option<NaiveDate> {
    record
        .field(DATE_KEY)
        .and_then(Value::as_str)
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Round to the two-decimal precision the sentiment sources publish at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resolve one raw record against the canonical key table. Missing or
/// non-numeric bank scores default to 0.0; a record without a parseable
/// date is unusable and yields `None`. Total, never an error.
pub fn canonicalize_record(record: &RawSentimentRecord) -> Option<SentimentPoint> {
    let date = match resolve_date(record) {
        Some(date) => date,
        None => {
            debug!("dropping sentiment record without a parseable date");
            return None;
        }
    };

    let fed = round2(resolve_score(record, &FED_KEYS));
    let boc = round2(resolve_score(record, &BOC_KEYS));

    Some(SentimentPoint {
        date,
        fed,
        boc,
        divergence: fed - boc,
    })
}

/// Canonicalize a batch and sort it ascending by date, the order the
/// series aligner requires.
pub fn canonicalize_records(records: &[RawSentimentRecord]) -> Vec<SentimentPoint> {
    let mut points: Vec<SentimentPoint> = records.iter().filter_map(canonicalize_record).collect();
    points.sort_by_key(|point| point.date);
    points
}
