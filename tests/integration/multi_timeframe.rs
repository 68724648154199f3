//! Multi-timeframe analysis end to end

use signalscope::{
    analyze, analyze_multi_timeframe, AlignmentAssessment, AnalysisOptions, EngineError,
    SignalEngine, TrendDirection,
};

use crate::test_utils::create_trending_candles;

fn options() -> AnalysisOptions {
    AnalysisOptions {
        sma_periods: vec![10, 20],
        ..AnalysisOptions::default()
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SignalEngine>();
}

#[test]
fn test_each_timeframe_matches_single_analysis_of_its_window() {
    let candles = create_trending_candles(120, 100.0, 0.5);
    let report = analyze_multi_timeframe(&candles, &[40, 80, 120], &options()).unwrap();
    assert_eq!(report.timeframes.len(), 3);
    assert!(report.skipped.is_empty());

    for horizon in [40, 80, 120] {
        let window = &candles[candles.len() - horizon..];
        let single = analyze(window, &options()).unwrap();
        let timeframe = report.timeframe(horizon).unwrap();
        assert_eq!(timeframe.signal, single);
        assert_eq!(timeframe.signal.points, horizon);
    }
}

#[test]
fn test_timeframes_keep_request_order() {
    let candles = create_trending_candles(120, 100.0, 0.5);
    let report = analyze_multi_timeframe(&candles, &[120, 40, 80], &options()).unwrap();
    let horizons: Vec<usize> = report.timeframes.iter().map(|t| t.horizon).collect();
    assert_eq!(horizons, vec![120, 40, 80]);
    for timeframe in &report.timeframes {
        assert_eq!(timeframe.trend_direction, TrendDirection::Up);
        assert!(timeframe.price_change_percent > 0.0);
    }
}

#[test]
fn test_aligned_uptrend_scores_high() {
    let candles = create_trending_candles(120, 100.0, 0.5);
    let report = analyze_multi_timeframe(&candles, &[40, 80, 120], &options()).unwrap();
    assert_eq!(report.alignment.total_horizons, 3);
    assert!(report.alignment.score >= 50.0);
    assert!(report.alignment.score <= 100.0);
}

#[test]
fn test_short_and_long_horizons_are_skipped() {
    let candles = create_trending_candles(120, 100.0, 0.5);
    let report = analyze_multi_timeframe(&candles, &[20, 60, 500], &options()).unwrap();

    assert_eq!(report.timeframes.len(), 1);
    assert_eq!(report.timeframes[0].horizon, 60);
    assert_eq!(report.skipped.len(), 2);

    let short = report.skipped.iter().find(|s| s.horizon == 20).unwrap();
    assert_eq!(short.required, 35);
    assert_eq!(short.available, 20);
    let long = report.skipped.iter().find(|s| s.horizon == 500).unwrap();
    assert_eq!(long.required, 500);
    assert_eq!(long.available, 120);

    assert_eq!(report.alignment.assessment, AlignmentAssessment::InsufficientData);
    assert_eq!(report.alignment.score, 0.0);
}

#[test]
fn test_no_analysable_horizon_is_an_error() {
    let candles = create_trending_candles(120, 100.0, 0.5);
    let err = analyze_multi_timeframe(&candles, &[10, 20], &options()).unwrap_err();
    assert!(matches!(err, EngineError::InsufficientData { required: 35, .. }));
}

#[test]
fn test_empty_horizon_list_is_invalid() {
    let candles = create_trending_candles(120, 100.0, 0.5);
    assert!(matches!(
        analyze_multi_timeframe(&candles, &[], &options()),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn test_malformed_series_fails_every_horizon() {
    let mut candles = create_trending_candles(120, 100.0, 0.5);
    candles[5].close = -1.0;
    assert!(matches!(
        analyze_multi_timeframe(&candles, &[40, 80], &options()),
        Err(EngineError::MalformedSeries { index: 5, .. })
    ));
}
