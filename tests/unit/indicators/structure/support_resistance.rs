//! Unit tests for support/resistance detection

use chrono::{DateTime, Duration, TimeZone, Utc};
use signalscope::config::Thresholds;
use signalscope::indicators::structure::{
    calculate_support_resistance, calculate_support_resistance_default, SupportResistance,
};
use signalscope::indicators::Indicator;
use signalscope::models::indicators::{Classification, IndicatorValues, Proximity};
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
fn test_support_resistance_insufficient_data() {
    let candles = create_candles_from_closes(&[10.0; 10]);
    assert!(calculate_support_resistance_default(&candles).is_none());
}

#[test]
fn test_support_resistance_local_extremes() {
    let candles =
        create_candles_from_closes(&[10.0, 9.0, 8.0, 9.0, 10.0, 11.0, 12.0, 11.0, 10.0, 11.0]);
    let levels = calculate_support_resistance(&candles, 2, &Thresholds::default()).unwrap();
    assert_eq!(levels.current_price, 11.0);
    assert_eq!(levels.nearest_support, 8.0);
    assert_eq!(levels.nearest_resistance, 12.0);
    assert_eq!(levels.support_levels, vec![8.0]);
    assert_eq!(levels.resistance_levels, vec![12.0]);
    assert!((levels.support_distance_pct - 3.0 / 11.0 * 100.0).abs() < 1e-9);
    assert!((levels.resistance_distance_pct - 1.0 / 11.0 * 100.0).abs() < 1e-9);
    assert_eq!(levels.proximity, Proximity::CloserToResistance);
}

#[test]
fn test_support_resistance_falls_back_to_extremes() {
    let candles = create_candles_from_closes(&[10.0, 9.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0]);
    let levels = calculate_support_resistance(&candles, 2, &Thresholds::default()).unwrap();
    assert!(levels.resistance_levels.is_empty());
    assert_eq!(levels.nearest_resistance, 14.0);
    assert_eq!(levels.proximity, Proximity::NearResistance);
}

#[test]
fn test_support_resistance_indicator_is_neutral() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 + ((i as f64) * 0.4).sin() * 5.0)
        .collect();
    let result =
        SupportResistance::new(5).evaluate(&create_candles_from_closes(&closes), &Thresholds::default());
    assert_eq!(result.classification, Classification::Neutral);
    match result.values {
        IndicatorValues::SupportResistance(levels) => {
            assert!(levels.support_levels.len() <= 5);
            assert!(levels.support_levels.iter().all(|s| *s < levels.current_price));
            assert!(levels.resistance_levels.iter().all(|r| *r > levels.current_price));
            assert!(levels.support_levels.windows(2).all(|w| w[0] > w[1]));
        }
        other => panic!("unexpected values {:?}", other),
    }
}
