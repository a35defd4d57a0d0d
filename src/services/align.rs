// src/services/align.rs
use crate::models::{MergedPoint, PricePoint, SentimentPoint};

/// Join the sentiment series with the price series by carrying the most
/// recent price dated at or before each sentiment date forward.
///
/// The price series may arrive in any order and with gaps; it is sorted
/// internally once. The sentiment series must already be ascending by
/// date: the price cursor only moves forward, so out-of-order sentiment
/// input produces unspecified alignment. O(n + m).
pub fn merge_with_prices(sentiment: &[SentimentPoint], prices: &[PricePoint]) -> Vec<MergedPoint> {
    let mut sorted_prices = prices.to_vec();
    sorted_prices.sort_by_key(|price| price.date);

    let mut merged = Vec::with_capacity(sentiment.len());
    let mut cursor = 0;
    let mut last_price = None;

    for point in sentiment {
        while cursor < sorted_prices.len() && sorted_prices[cursor].date <= point.date {
            last_price = Some(sorted_prices[cursor].price);
            cursor += 1;
        }
        merged.push(MergedPoint {
            sentiment: *point,
            price_as_of: last_price,
        });
    }
    merged
}
