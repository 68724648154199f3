//! Unit tests for Bollinger Bands

use chrono::{DateTime, Duration, TimeZone, Utc};
use signalscope::config::Thresholds;
use signalscope::indicators::volatility::{calculate_bollinger_bands, classify_bollinger};
use signalscope::models::indicators::Classification;
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

#[test]
fn test_bollinger_insufficient_data() {
    let candles = create_candles_from_closes(&[1.0, 2.0, 3.0]);
    assert!(calculate_bollinger_bands(&candles, 5, 2.0, &Thresholds::default()).is_none());
    assert!(calculate_bollinger_bands(&candles, 1, 2.0, &Thresholds::default()).is_none());
}

#[test]
fn test_bollinger_known_values() {
    let candles = create_candles_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let bands = calculate_bollinger_bands(&candles, 5, 2.0, &Thresholds::default()).unwrap();
    let std = 2.5_f64.sqrt();
    assert!((bands.middle - 3.0).abs() < 1e-9);
    assert!((bands.upper - (3.0 + 2.0 * std)).abs() < 1e-9);
    assert!((bands.lower - (3.0 - 2.0 * std)).abs() < 1e-9);
    let position = (5.0 - bands.lower) / (bands.upper - bands.lower) * 100.0;
    assert!((bands.position_pct - position).abs() < 1e-9);
    assert_eq!(classify_bollinger(&bands, 5.0).0, Classification::Bullish);
}

#[test]
fn test_bollinger_flat_series() {
    let candles = create_candles_from_closes(&[100.0; 20]);
    let bands = calculate_bollinger_bands(&candles, 20, 2.0, &Thresholds::default()).unwrap();
    assert_eq!(bands.position_pct, 50.0);
    assert_eq!(bands.width_pct, 0.0);
    assert!(!bands.high_volatility);
    assert_eq!(classify_bollinger(&bands, 100.0).0, Classification::Neutral);
}

#[test]
fn test_bollinger_spike_above_upper_band() {
    let mut closes = vec![100.0; 19];
    closes.push(130.0);
    let candles = create_candles_from_closes(&closes);
    let bands = calculate_bollinger_bands(&candles, 20, 2.0, &Thresholds::default()).unwrap();
    // mean 101.5, sample variance 45
    assert!((bands.upper - (101.5 + 2.0 * 45.0_f64.sqrt())).abs() < 1e-9);
    assert_eq!(classify_bollinger(&bands, 130.0).0, Classification::Overbought);
    assert!(bands.high_volatility);
}

#[test]
fn test_bollinger_drop_below_lower_band() {
    let mut closes = vec![100.0; 19];
    closes.push(70.0);
    let candles = create_candles_from_closes(&closes);
    let bands = calculate_bollinger_bands(&candles, 20, 2.0, &Thresholds::default()).unwrap();
    assert_eq!(classify_bollinger(&bands, 70.0).0, Classification::Oversold);
}
