//! Unit tests for chart patterns

use chrono::{DateTime, Duration, TimeZone, Utc};
use signalscope::config::Thresholds;
use signalscope::models::indicators::Bias;
use signalscope::models::pattern::{PatternCategory, PatternId, PatternMatch};
use signalscope::models::series::Candle;
use signalscope::patterns::{detect_channel, detect_chart_patterns, detect_patterns, turning_points};

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(i as i64)
}

fn create_candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Candle::from_price(close, 1000.0, ts(i)))
        .collect()
}

fn double_top_closes() -> Vec<f64> {
    vec![
        100.0, 102.0, 104.0, 106.0, 108.0, 110.0, 108.0, 106.0, 104.0, 102.0, 100.0, 102.0, 104.0,
        106.0, 108.0, 110.5, 109.0, 108.0, 106.0, 104.0,
    ]
}

fn find(patterns: &[PatternMatch], id: PatternId) -> Option<&PatternMatch> {
    patterns.iter().find(|p| p.pattern == id)
}

#[test]
fn test_turning_points() {
    assert_eq!(turning_points(&[1.0, 3.0, 2.0, 4.0, 1.0]), (vec![1, 3], vec![2]));
    assert_eq!(turning_points(&[1.0, 2.0]), (vec![], vec![]));
}

#[test]
fn test_short_window_yields_nothing() {
    let candles = create_candles_from_closes(&[100.0; 10]);
    assert!(detect_chart_patterns(&candles, &Thresholds::default()).is_empty());
}

#[test]
fn test_double_top() {
    let candles = create_candles_from_closes(&double_top_closes());
    let patterns = detect_chart_patterns(&candles, &Thresholds::default());
    let top = find(&patterns, PatternId::DoubleTop).expect("double top");
    assert_eq!(top.bias, Bias::Bearish);
    assert_eq!(top.category, PatternCategory::Chart);
    assert_eq!(top.detected_at, 15);
    assert_eq!(top.price_level, Some(110.5));
    assert!(find(&patterns, PatternId::DoubleBottom).is_none());
}

#[test]
fn test_double_bottom() {
    let closes: Vec<f64> = double_top_closes().iter().map(|c| 210.0 - c).collect();
    let patterns = detect_chart_patterns(&create_candles_from_closes(&closes), &Thresholds::default());
    let bottom = find(&patterns, PatternId::DoubleBottom).expect("double bottom");
    assert_eq!(bottom.bias, Bias::Bullish);
    assert_eq!(bottom.detected_at, 15);
    assert_eq!(bottom.price_level, Some(99.5));
    assert!(find(&patterns, PatternId::DoubleTop).is_none());
}

#[test]
fn test_peaks_too_far_apart_are_not_a_double_top() {
    let mut closes = double_top_closes();
    closes[15] = 115.0;
    let patterns = detect_chart_patterns(&create_candles_from_closes(&closes), &Thresholds::default());
    assert!(find(&patterns, PatternId::DoubleTop).is_none());
}

#[test]
fn test_breakout_and_breakdown() {
    let mut closes: Vec<f64> = (0..19)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect();
    closes.push(105.0);
    let patterns = detect_chart_patterns(&create_candles_from_closes(&closes), &Thresholds::default());
    let breakout = find(&patterns, PatternId::UpsideBreakout).expect("breakout");
    assert_eq!(breakout.price_level, Some(101.0));
    assert_eq!(breakout.detected_at, 19);

    *closes.last_mut().unwrap() = 95.0;
    let patterns = detect_chart_patterns(&create_candles_from_closes(&closes), &Thresholds::default());
    let breakdown = find(&patterns, PatternId::DownsideBreakdown).expect("breakdown");
    assert_eq!(breakdown.price_level, Some(100.0));
    assert_eq!(breakdown.bias, Bias::Bearish);
}

#[test]
fn test_consolidation() {
    let mut closes: Vec<f64> = (0..30)
        .map(|i| if i % 2 == 0 { 100.0 } else { 110.0 })
        .collect();
    closes.extend([105.0, 104.0, 105.0, 104.0, 105.0]);
    let patterns = detect_chart_patterns(&create_candles_from_closes(&closes), &Thresholds::default());
    let consolidation = find(&patterns, PatternId::Consolidation).expect("consolidation");
    assert_eq!(consolidation.bias, Bias::Neutral);
}

#[test]
fn test_linear_rise_is_a_rising_channel() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let patterns = detect_chart_patterns(&create_candles_from_closes(&closes), &Thresholds::default());
    let ids: Vec<PatternId> = patterns.iter().map(|p| p.pattern).collect();
    assert_eq!(ids, vec![PatternId::RisingChannel]);
}

#[test]
fn test_linear_fall_is_a_falling_channel() {
    let closes: Vec<f64> = (0..20).map(|i| 200.0 - i as f64).collect();
    let channel = detect_channel(&create_candles_from_closes(&closes), &Thresholds::default())
        .expect("channel");
    assert_eq!(channel.pattern, PatternId::FallingChannel);
    assert_eq!(channel.bias, Bias::Bearish);
}

#[test]
fn test_flat_series_is_not_a_channel() {
    let candles = create_candles_from_closes(&[100.0; 20]);
    assert!(detect_channel(&candles, &Thresholds::default()).is_none());
}

#[test]
fn test_detect_patterns_lists_price_action_first() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let patterns = detect_patterns(&create_candles_from_closes(&closes), &Thresholds::default());
    assert_eq!(patterns.first().map(|p| p.category), Some(PatternCategory::Price));
    assert_eq!(patterns.last().map(|p| p.pattern), Some(PatternId::RisingChannel));
}
