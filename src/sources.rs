// src/sources.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;

use crate::models::{PricePoint, RawSentimentRecord, SentenceScore};

/// Upstream producer of raw sentiment records (a scraper, a database, a
/// fixture). Delivered unordered, possibly with unrecognized key
/// spellings; canonicalization happens downstream.
#[async_trait]
pub trait SentimentSource: Send + Sync {
    async fn fetch_sentiment_records(&self) -> Result<Vec<RawSentimentRecord>>;
}

/// Upstream producer of daily prices. Delivered unordered, possibly with
/// gaps for non-trading days.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_price_records(&self) -> Result<Vec<PricePoint>>;
}

/// Producer of the scoring oracle's per-sentence output for one
/// transcript, in source order.
#[async_trait]
pub trait SentenceSource: Send + Sync {
    async fn fetch_sentence_records(&self, transcript_id: i64) -> Result<Vec<SentenceScore>>;
}

/// Fetch the two market series concurrently. The fetches are independent;
/// the only ordering requirement is that both complete before alignment
/// begins. The computational core never fetches anything itself.
pub async fn fetch_market_inputs<S, P>(
    sentiment: &S,
    prices: &P,
) -> Result<(Vec<RawSentimentRecord>, Vec<PricePoint>)>
where
    S: SentimentSource + ?Sized,
    P: PriceSource + ?Sized,
{
    let (records, price_points) = tokio::try_join!(
        sentiment.fetch_sentiment_records(),
        prices.fetch_price_records()
    )
    .context("fetching market inputs")?;

    info!(
        "fetched {} sentiment records and {} price points",
        records.len(),
        price_points.len()
    );
    Ok((records, price_points))
}
