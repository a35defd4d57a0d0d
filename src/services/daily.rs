// src/services/daily.rs
use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::{Bank, BankObservation, SentimentPoint};
use crate::services::canonical::round2;

fn averaged_by_date(observations: &[BankObservation], bank: Bank) -> BTreeMap<NaiveDate, f64> {
    let mut buckets: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
    for obs in observations.iter().filter(|obs| obs.bank == bank) {
        let entry = buckets.entry(obs.date).or_insert((0.0, 0));
        entry.0 += obs.score;
        entry.1 += 1;
    }
    buckets
        .into_iter()
        .map(|(date, (sum, count))| (date, sum / count as f64))
        .collect()
}

/// Expand sparse bank-tagged observations onto a continuous daily axis
/// running from the earliest to the latest observed date across both
/// banks. Same-(date, bank) duplicates are averaged, each bank's last
/// known score is carried across gaps, and a bank scores 0.0 before its
/// first observation.
pub fn daily_sentiment_series(observations: &[BankObservation]) -> Vec<SentimentPoint> {
    let fed = averaged_by_date(observations, Bank::Fed);
    let boc = averaged_by_date(observations, Bank::Boc);

    let first = [fed.keys().next(), boc.keys().next()]
        .into_iter()
        .flatten()
        .min()
        .copied();
    let last = [fed.keys().next_back(), boc.keys().next_back()]
        .into_iter()
        .flatten()
        .max()
        .copied();
    let (start, end) = match (first, last) {
        (Some(start), Some(end)) => (start, end),
        _ => return Vec::new(),
    };

    let mut points = Vec::new();
    let mut fed_level = 0.0;
    let mut boc_level = 0.0;
    let mut date = start;
    while date <= end {
        if let Some(score) = fed.get(&date) {
            fed_level = *score;
        }
        if let Some(score) = boc.get(&date) {
            boc_level = *score;
        }
        let fed_score = round2(fed_level);
        let boc_score = round2(boc_level);
        points.push(SentimentPoint {
            date,
            fed: fed_score,
            boc: boc_score,
            divergence: fed_score - boc_score,
        });
        date = date + Duration::days(1);
    }
    points
}
