//! Unit tests for RSI indicator

use chrono::{DateTime, Duration, TimeZone, Utc};
use signalscope::config::Thresholds;
use signalscope::indicators::momentum::{calculate_rsi, calculate_rsi_default, classify_rsi, Rsi};
use signalscope::indicators::Indicator;
use signalscope::models::indicators::{Classification, IndicatorValues, RsiIndicator};
use signalscope::models::series::Candle;

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

fn create_test_candles(count: usize, step: f64) -> Vec<Candle> {
    let closes: Vec<f64> = (0..count).map(|i| 100.0 + i as f64 * step).collect();
    create_candles_from_closes(&closes)
}

#[test]
fn test_rsi_insufficient_data() {
    let candles = create_test_candles(14, 1.0);
    assert!(calculate_rsi(&candles, 14).is_none());
    assert!(calculate_rsi_default(&create_test_candles(15, 1.0)).is_some());
}

#[test]
fn test_rsi_flat_series_is_midpoint() {
    let candles = create_test_candles(30, 0.0);
    let rsi = calculate_rsi(&candles, 14).unwrap();
    assert_eq!(rsi.value, 50.0);
    let (classification, _) = classify_rsi(&rsi, &Thresholds::default());
    assert_eq!(classification, Classification::Neutral);
}

#[test]
fn test_rsi_only_gains_is_overbought() {
    let rsi = calculate_rsi(&create_test_candles(30, 1.0), 14).unwrap();
    assert_eq!(rsi.value, 100.0);
    let (classification, _) = classify_rsi(&rsi, &Thresholds::default());
    assert_eq!(classification, Classification::Overbought);
}

#[test]
fn test_rsi_only_losses_is_oversold() {
    let rsi = calculate_rsi(&create_test_candles(30, -1.0), 14).unwrap();
    assert_eq!(rsi.value, 0.0);
    let (classification, _) = classify_rsi(&rsi, &Thresholds::default());
    assert_eq!(classification, Classification::Oversold);
}

#[test]
fn test_rsi_known_value() {
    // +1.0 then -0.5: RS = 2
    let candles = create_candles_from_closes(&[1.0, 2.0, 1.5]);
    let rsi = calculate_rsi(&candles, 2).unwrap();
    assert!((rsi.value - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_rsi_classification_boundaries() {
    let thresholds = Thresholds::default();
    let at = |value: f64| classify_rsi(&RsiIndicator { value, period: 14 }, &thresholds).0;
    assert_eq!(at(70.0), Classification::Bullish);
    assert_eq!(at(70.1), Classification::Overbought);
    assert_eq!(at(30.0), Classification::Bearish);
    assert_eq!(at(29.9), Classification::Oversold);
    assert_eq!(at(50.0), Classification::Neutral);
}

#[test]
fn test_rsi_thresholds_are_injectable() {
    let thresholds = Thresholds {
        rsi_overbought: 80.0,
        ..Thresholds::default()
    };
    let rsi = RsiIndicator {
        value: 75.0,
        period: 14,
    };
    assert_eq!(classify_rsi(&rsi, &thresholds).0, Classification::Bullish);
}

#[test]
fn test_rsi_indicator_reports_insufficient() {
    let result = Rsi::new(14).evaluate(&create_test_candles(10, 1.0), &Thresholds::default());
    assert!(result.is_insufficient());
    assert_eq!(
        result.values,
        IndicatorValues::Insufficient {
            required: 15,
            available: 10
        }
    );
}
