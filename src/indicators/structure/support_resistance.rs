//! Support and Resistance levels detection

use crate::config::Thresholds;
use crate::indicators::registry::Indicator;
use crate::models::indicators::{
    Classification, IndicatorKind, IndicatorResult, IndicatorValues, Proximity,
    SupportResistanceIndicator,
};
use crate::models::series::Candle;

const MAX_LEVELS: usize = 5;

/// Indices whose value is the extreme of the `window` values on either side.
fn local_extrema(values: &[f64], window: usize, want_min: bool) -> Vec<f64> {
    if values.len() <= window * 2 {
        return Vec::new();
    }
    (window..values.len() - window)
        .filter(|&i| {
            let neighbourhood = &values[i - window..=i + window];
            if want_min {
                neighbourhood.iter().all(|v| values[i] <= *v)
            } else {
                neighbourhood.iter().all(|v| values[i] >= *v)
            }
        })
        .map(|i| values[i])
        .collect()
}

/// Sorted, de-duplicated, nearest first, capped at five.
fn top_levels(mut levels: Vec<f64>, descending: bool) -> Vec<f64> {
    levels.sort_by(|a, b| if descending { b.total_cmp(a) } else { a.total_cmp(b) });
    levels.dedup();
    levels.truncate(MAX_LEVELS);
    levels
}

/// Calculate support and resistance levels
///
/// A low that is the minimum of the `lookback` bars on either side is a
/// support candidate; a high that is the maximum is a resistance candidate.
/// Without a level on the right side of price, the series extreme is used.
pub fn calculate_support_resistance(
    candles: &[Candle],
    lookback: u32,
    thresholds: &Thresholds,
) -> Option<SupportResistanceIndicator> {
    let window = lookback as usize;
    if window == 0 || candles.len() < window {
        return None;
    }

    let current_price = candles.last()?.close;
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();

    let support_levels = top_levels(
        local_extrema(&lows, window, true)
            .into_iter()
            .filter(|s| *s < current_price)
            .collect(),
        true,
    );
    let resistance_levels = top_levels(
        local_extrema(&highs, window, false)
            .into_iter()
            .filter(|r| *r > current_price)
            .collect(),
        false,
    );

    let nearest_support = match support_levels.first() {
        Some(level) => *level,
        None => lows.iter().copied().fold(f64::INFINITY, f64::min),
    };
    let nearest_resistance = match resistance_levels.first() {
        Some(level) => *level,
        None => highs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };

    let (support_distance_pct, resistance_distance_pct) = if current_price > 0.0 {
        (
            (current_price - nearest_support) / current_price * 100.0,
            (nearest_resistance - current_price) / current_price * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    let near = thresholds.support_resistance_near_pct;
    let proximity = if support_distance_pct < near {
        Proximity::NearSupport
    } else if resistance_distance_pct < near {
        Proximity::NearResistance
    } else if support_distance_pct < resistance_distance_pct {
        Proximity::CloserToSupport
    } else {
        Proximity::CloserToResistance
    };

    Some(SupportResistanceIndicator {
        current_price,
        nearest_support,
        nearest_resistance,
        support_distance_pct,
        resistance_distance_pct,
        support_levels,
        resistance_levels,
        proximity,
    })
}

/// Calculate support/resistance with default lookback (20)
pub fn calculate_support_resistance_default(
    candles: &[Candle],
) -> Option<SupportResistanceIndicator> {
    calculate_support_resistance(candles, 20, &Thresholds::default())
}

pub fn describe_levels(levels: &SupportResistanceIndicator) -> String {
    let zone = match levels.proximity {
        Proximity::NearSupport => "near support, potential bounce zone",
        Proximity::NearResistance => "near resistance, potential reversal zone",
        Proximity::CloserToSupport => "closer to support than resistance",
        Proximity::CloserToResistance => "closer to resistance than support",
    };
    format!(
        "Support {:.4} ({:.2}% below), resistance {:.4} ({:.2}% above); {}",
        levels.nearest_support,
        levels.support_distance_pct,
        levels.nearest_resistance,
        levels.resistance_distance_pct,
        zone
    )
}

pub struct SupportResistance {
    lookback: u32,
}

impl SupportResistance {
    pub fn new(lookback: u32) -> Self {
        Self { lookback }
    }
}

impl Indicator for SupportResistance {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::SupportResistance
    }

    fn required_points(&self) -> usize {
        (self.lookback as usize).max(1)
    }

    fn evaluate(&self, candles: &[Candle], thresholds: &Thresholds) -> IndicatorResult {
        match calculate_support_resistance(candles, self.lookback, thresholds) {
            Some(levels) => {
                let note = describe_levels(&levels);
                IndicatorResult::new(
                    self.kind(),
                    IndicatorValues::SupportResistance(levels),
                    Classification::Neutral,
                    note,
                )
            }
            None => self.insufficient(candles.len()),
        }
    }
}
