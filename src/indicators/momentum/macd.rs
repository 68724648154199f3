//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::config::Thresholds;
use crate::indicators::crossover::latest_crossover;
use crate::indicators::registry::Indicator;
use crate::models::indicators::{
    Classification, CrossoverType, IndicatorKind, IndicatorResult, IndicatorValues, MacdIndicator,
};
use crate::models::series::Candle;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    if fast_period == 0 || fast_period >= slow_period || signal_period == 0 {
        return None;
    }
    if candles.len() < (slow_period as usize).saturating_add(signal_period as usize) {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast_ema = math::ema_series(&closes, fast_period as usize);
    let slow_ema = math::ema_series(&closes, slow_period as usize);

    // Align the fast series on the slow one: both end at the last close.
    let offset = fast_ema.len() - slow_ema.len();
    let macd_line: Vec<f64> = slow_ema
        .iter()
        .enumerate()
        .map(|(i, slow)| fast_ema[i + offset] - slow)
        .collect();

    let signal_line = math::ema_series(&macd_line, signal_period as usize);
    let macd = *macd_line.last()?;
    let signal = *signal_line.last()?;

    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
        period: (fast_period, slow_period, signal_period),
        crossover: latest_crossover(&macd_line, &signal_line),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, 12, 26, 9)
}

pub fn classify_macd(macd: &MacdIndicator) -> (Classification, String) {
    match macd.crossover {
        CrossoverType::Bullish => (
            Classification::Bullish,
            "MACD crossed above signal line".to_string(),
        ),
        CrossoverType::Bearish => (
            Classification::Bearish,
            "MACD crossed below signal line".to_string(),
        ),
        CrossoverType::None if macd.macd > macd.signal => (
            Classification::Bullish,
            format!("MACD above signal line, histogram {:.4}", macd.histogram),
        ),
        CrossoverType::None if macd.macd < macd.signal => (
            Classification::Bearish,
            format!("MACD below signal line, histogram {:.4}", macd.histogram),
        ),
        CrossoverType::None => (
            Classification::Neutral,
            "MACD on its signal line".to_string(),
        ),
    }
}

pub struct Macd {
    fast: u32,
    slow: u32,
    signal: u32,
}

impl Macd {
    pub fn new(fast: u32, slow: u32, signal: u32) -> Self {
        Self { fast, slow, signal }
    }
}

impl Indicator for Macd {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Macd
    }

    fn required_points(&self) -> usize {
        (self.slow as usize).saturating_add(self.signal as usize)
    }

    fn evaluate(&self, candles: &[Candle], _thresholds: &Thresholds) -> IndicatorResult {
        match calculate_macd(candles, self.fast, self.slow, self.signal) {
            Some(macd) => {
                let (classification, note) = classify_macd(&macd);
                IndicatorResult::new(self.kind(), IndicatorValues::Macd(macd), classification, note)
            }
            None => self.insufficient(candles.len()),
        }
    }
}
