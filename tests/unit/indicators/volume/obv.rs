//! Unit tests for OBV indicator

use chrono::{DateTime, Duration, TimeZone, Utc};
use signalscope::indicators::volume::{calculate_obv, classify_obv, obv_series};
use signalscope::models::indicators::{Bias, Classification, FlowTrend};
use signalscope::models::series::Candle;

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(i as i64)
}

fn create_candles(points: &[(f64, f64)]) -> Vec<Candle> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(close, volume))| Candle::from_price(close, volume, ts(i)))
        .collect()
}

#[test]
fn test_obv_series_accumulates_by_direction() {
    let candles = create_candles(&[
        (10.0, 100.0),
        (11.0, 200.0),
        (10.5, 300.0),
        (10.5, 400.0),
        (12.0, 500.0),
    ]);
    assert_eq!(obv_series(&candles), vec![0.0, 200.0, -100.0, -100.0, 400.0]);
}

#[test]
fn test_obv_insufficient_data() {
    let points: Vec<(f64, f64)> = (0..19).map(|i| (100.0 + i as f64, 1000.0)).collect();
    assert!(calculate_obv(&create_candles(&points), 20, 10).is_none());
}

#[test]
fn test_obv_uptrend_is_accumulation() {
    let points: Vec<(f64, f64)> = (0..30).map(|i| (100.0 + i as f64, 1000.0)).collect();
    let obv = calculate_obv(&create_candles(&points), 20, 10).unwrap();
    assert_eq!(obv.trend, FlowTrend::Rising);
    assert!(obv.value > obv.sma);
    assert!(obv.divergence.is_none());
    assert_eq!(classify_obv(&obv).0, Classification::Bullish);
}

#[test]
fn test_obv_bearish_divergence() {
    // Large gains on thin volume, small losses on heavy volume.
    let mut price = 100.0;
    let points: Vec<(f64, f64)> = (0..30)
        .map(|i| {
            if i > 0 && i % 2 == 1 {
                price += 2.0;
                (price, 10.0)
            } else if i > 0 {
                price -= 1.0;
                (price, 1000.0)
            } else {
                (price, 10.0)
            }
        })
        .collect();
    let obv = calculate_obv(&create_candles(&points), 20, 10).unwrap();
    assert_eq!(obv.trend, FlowTrend::Falling);
    assert_eq!(obv.divergence, Some(Bias::Bearish));
    let (classification, note) = classify_obv(&obv);
    assert_eq!(classification, Classification::Bearish);
    assert!(note.contains("weak rally"));
}
