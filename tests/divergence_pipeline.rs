// End-to-end flow: raw records through canonicalization, windowing,
// price alignment, and summary statistics.

use divergence_core::config::AnalysisConfig;
use divergence_core::models::{PricePoint, RawSentimentRecord, SentenceScore, StanceLabel, Window};
use divergence_core::services::canonical::canonicalize_records;
use divergence_core::services::pipeline::align_and_summarize;
use divergence_core::services::scoring::{score_transcript, stance_label};
use serde_json::{json, Value};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn record(fields: &[(&str, Value)]) -> RawSentimentRecord {
    RawSentimentRecord(
        fields
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect(),
    )
}

fn price(date: &str, value: f64) -> PricePoint {
    PricePoint {
        date: date.parse().unwrap(),
        price: value,
    }
}

#[test]
fn raw_records_flow_through_to_aligned_statistics() {
    init_logging();

    // Mixed key spellings, one duplicate-spelling record, one undated
    // record that must be dropped, delivered out of order.
    let raw = vec![
        record(&[("date", json!("2024-01-03")), ("fed", json!(0.30)), ("BoC", json!(0.10))]),
        record(&[("Fed", json!(0.9)), ("boc", json!(0.2))]),
        record(&[("date", json!("2024-01-01")), ("Fed", json!(0.20)), ("boc", json!(0.00))]),
        record(&[("date", json!("2024-01-02")), ("Fed", json!(0.254)), ("BoC", json!(0.052))]),
    ];

    let sentiment = canonicalize_records(&raw);
    assert_eq!(sentiment.len(), 3);
    assert_eq!(sentiment[0].date.to_string(), "2024-01-01");
    assert_eq!(sentiment[1].fed, 0.25);
    assert_eq!(sentiment[1].boc, 0.05);

    let prices = vec![
        price("2024-01-02", 1.31),
        price("2024-01-01", 1.30),
    ];

    let (merged, stats) =
        align_and_summarize(&sentiment, &prices, &Window::All, &AnalysisConfig::default());

    assert_eq!(merged.len(), 3);
    assert_eq!(merged[0].price_as_of, Some(1.30));
    assert_eq!(merged[1].price_as_of, Some(1.31));
    // No newer price exists for Jan 3; Jan 2 carries forward.
    assert_eq!(merged[2].price_as_of, Some(1.31));

    assert_eq!(stats.current, merged[2].sentiment.divergence);
    assert!(stats.volatility >= 0.0);
    // Three points cannot support a lagged correlation.
    assert_eq!(stats.forward_correlation, 0.0);
    assert!(stats.flags.insufficient_sample);
    assert!(!stats.flags.empty_window);
}

#[test]
fn windowing_changes_the_summary_without_mutating_inputs() {
    init_logging();

    let raw: Vec<RawSentimentRecord> = (1..=9)
        .map(|day| {
            record(&[
                ("date", json!(format!("2024-01-{day:02}"))),
                ("Fed", json!(0.1 * day as f64)),
                ("boc", json!(0.05)),
            ])
        })
        .collect();
    let sentiment = canonicalize_records(&raw);
    let prices: Vec<PricePoint> = (1..=9)
        .map(|day| price(&format!("2024-01-{day:02}"), 1.30 + day as f64 * 0.001))
        .collect();

    let window = Window::Range {
        start: "2024-01-03".parse().unwrap(),
        end: "2024-01-07".parse().unwrap(),
    };
    let (merged, stats) =
        align_and_summarize(&sentiment, &prices, &window, &AnalysisConfig::default());
    assert_eq!(merged.len(), 5);
    assert_eq!(stats.current, merged.last().unwrap().sentiment.divergence);

    let (all_merged, _) =
        align_and_summarize(&sentiment, &prices, &Window::All, &AnalysisConfig::default());
    assert_eq!(all_merged.len(), 9);
}

#[test]
fn transcript_scoring_matches_the_published_example() {
    let sentences = vec![
        SentenceScore {
            text: "We are raising the policy rate by 25 basis points today.".to_string(),
            stance: 0.85,
            impact: 1.0,
            topic: "Guidance".to_string(),
            reasoning: "Direct rate action".to_string(),
        },
        SentenceScore {
            text: "Employment growth remains robust in most sectors.".to_string(),
            stance: 0.40,
            impact: 0.7,
            topic: "Employment".to_string(),
            reasoning: "Clear stance, active verb".to_string(),
        },
        SentenceScore {
            text: "We will continue to monitor economic data closely.".to_string(),
            stance: 0.0,
            impact: 0.0,
            topic: "Boilerplate".to_string(),
            reasoning: "Procedural".to_string(),
        },
    ];

    let score = score_transcript(&sentences);
    assert!((score - 1.13 / 1.7).abs() < 1e-12);
    assert_eq!(stance_label(score), StanceLabel::Hawkish);
}
