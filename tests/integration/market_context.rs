//! Combined market context end to end

use signalscope::{
    AnalysisOptions, CorrelationDirection, EngineError, MarketContext, RegimeZone, SignalEngine,
};

use crate::test_utils::create_trending_candles;

fn engine() -> SignalEngine {
    SignalEngine::with_options(AnalysisOptions {
        sma_periods: vec![10, 20],
        ..AnalysisOptions::default()
    })
    .unwrap()
}

#[test]
fn test_full_context() {
    let engine = engine();
    let candles = create_trending_candles(120, 100.0, 0.5);
    let report = MarketContext::new(&engine, &candles, &[60, 120])
        .with_reference(&candles, 50)
        .with_sentiment(15.0)
        .build()
        .unwrap();

    assert_eq!(report.timeframes.timeframes.len(), 2);

    let correlation = report.correlation.expect("correlation");
    assert!((correlation.coefficient.unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(correlation.direction, CorrelationDirection::Positive);
    assert_eq!(correlation.overlapping_points, 50);

    let regime = report.regime.expect("regime");
    assert_eq!(regime.zone, RegimeZone::ExtremeFear);
}

#[test]
fn test_optional_sections_are_omitted() {
    let engine = engine();
    let candles = create_trending_candles(120, 100.0, 0.5);
    let report = MarketContext::new(&engine, &candles, &[60])
        .build()
        .unwrap();
    assert!(report.correlation.is_none());
    assert!(report.regime.is_none());

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("timeframes").is_some());
    assert!(json.get("correlation").is_none());
    assert!(json.get("regime").is_none());
}

#[test]
fn test_invalid_sentiment_fails_the_build() {
    let engine = engine();
    let candles = create_trending_candles(120, 100.0, 0.5);
    let result = MarketContext::new(&engine, &candles, &[60])
        .with_sentiment(150.0)
        .build();
    assert_eq!(result.unwrap_err(), EngineError::InvalidRegimeInput(150.0));
}
