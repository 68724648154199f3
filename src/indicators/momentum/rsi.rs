//! RSI (Relative Strength Index) indicator

use crate::config::Thresholds;
use crate::indicators::registry::Indicator;
use crate::models::indicators::{
    Classification, IndicatorKind, IndicatorResult, IndicatorValues, RsiIndicator,
};
use crate::models::series::Candle;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss over the last `period` changes
///
/// A window without any movement reports the midpoint (50).
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    if period == 0 || candles.len() < period as usize + 1 {
        return None;
    }

    let window = &candles[candles.len() - (period as usize + 1)..];
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for pair in window.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gain_sum += change;
        } else {
            loss_sum += change.abs();
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    let value = if avg_gain == 0.0 && avg_loss == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    };

    Some(RsiIndicator { value, period })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<RsiIndicator> {
    calculate_rsi(candles, 14)
}

pub fn classify_rsi(rsi: &RsiIndicator, thresholds: &Thresholds) -> (Classification, String) {
    let value = rsi.value;
    if value > thresholds.rsi_overbought {
        (
            Classification::Overbought,
            format!("RSI {:.1} overbought, consider taking profits", value),
        )
    } else if value < thresholds.rsi_oversold {
        (
            Classification::Oversold,
            format!("RSI {:.1} oversold, potential buying opportunity", value),
        )
    } else if value > thresholds.rsi_midpoint {
        (
            Classification::Bullish,
            format!("RSI {:.1} shows upward momentum", value),
        )
    } else if value < thresholds.rsi_midpoint {
        (
            Classification::Bearish,
            format!("RSI {:.1} shows downward momentum", value),
        )
    } else {
        (Classification::Neutral, format!("RSI {:.1} at midpoint", value))
    }
}

pub struct Rsi {
    period: u32,
}

impl Rsi {
    pub fn new(period: u32) -> Self {
        Self { period }
    }
}

impl Indicator for Rsi {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Rsi
    }

    fn required_points(&self) -> usize {
        self.period as usize + 1
    }

    fn evaluate(&self, candles: &[Candle], thresholds: &Thresholds) -> IndicatorResult {
        match calculate_rsi(candles, self.period) {
            Some(rsi) => {
                let (classification, note) = classify_rsi(&rsi, thresholds);
                IndicatorResult::new(self.kind(), IndicatorValues::Rsi(rsi), classification, note)
            }
            None => self.insufficient(candles.len()),
        }
    }
}
