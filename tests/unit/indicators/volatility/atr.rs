//! Unit tests for ATR indicator

use chrono::{DateTime, Duration, TimeZone, Utc};
use signalscope::config::Thresholds;
use signalscope::indicators::volatility::{calculate_atr, Atr};
use signalscope::indicators::Indicator;
use signalscope::models::indicators::{Classification, VolatilityLevel};
use signalscope::models::series::Candle;

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(i as i64)
}

fn create_ranging_candles(count: usize, half_range: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| Candle::new(100.0, 100.0 + half_range, 100.0 - half_range, 100.0, 1000.0, ts(i)))
        .collect()
}

#[test]
fn test_atr_insufficient_data() {
    let thresholds = Thresholds::default();
    assert!(calculate_atr(&create_ranging_candles(14, 1.0), 14, &thresholds).is_none());
    assert!(calculate_atr(&create_ranging_candles(15, 1.0), 14, &thresholds).is_some());
}

#[test]
fn test_atr_constant_range() {
    let atr = calculate_atr(&create_ranging_candles(30, 1.0), 14, &Thresholds::default()).unwrap();
    assert!((atr.value - 2.0).abs() < 1e-9);
    assert!((atr.atr_pct - 2.0).abs() < 1e-9);
    assert_eq!(atr.volatility, VolatilityLevel::Moderate);
    assert!((atr.suggested_stop_distance - 4.0).abs() < 1e-9);
    assert!((atr.suggested_stop_pct - 4.0).abs() < 1e-9);
}

#[test]
fn test_atr_volatility_levels() {
    let thresholds = Thresholds::default();
    let level = |half_range: f64| {
        calculate_atr(&create_ranging_candles(20, half_range), 14, &thresholds)
            .unwrap()
            .volatility
    };
    assert_eq!(level(3.0), VolatilityLevel::VeryHigh);
    assert_eq!(level(2.0), VolatilityLevel::High);
    assert_eq!(level(0.5), VolatilityLevel::Low);
}

#[test]
fn test_atr_indicator_is_undirected() {
    let result = Atr::new(14).evaluate(&create_ranging_candles(30, 1.0), &Thresholds::default());
    assert_eq!(result.classification, Classification::Neutral);
    assert!(result.note.contains("ATR"));
}
