//! Stochastic oscillator (%K / %D)

use crate::common::math;
use crate::config::Thresholds;
use crate::indicators::registry::Indicator;
use crate::models::indicators::{
    Classification, IndicatorKind, IndicatorResult, IndicatorValues, StochasticIndicator,
};
use crate::models::series::Candle;

/// %K = 100 * (close - lowest low) / (highest high - lowest low) over `k_period`;
/// %D = SMA(`d_period`) of %K. A flat range reports 50.
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: u32,
    d_period: u32,
) -> Option<StochasticIndicator> {
    let (k_len, d_len) = (k_period as usize, d_period as usize);
    if k_len == 0 || d_len == 0 || candles.len() < k_len.saturating_add(d_len) - 1 {
        return None;
    }

    let k_values: Vec<f64> = (k_len - 1..candles.len())
        .map(|end| {
            let window = &candles[end + 1 - k_len..=end];
            let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
            let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
            let range = highest - lowest;
            if range == 0.0 {
                50.0
            } else {
                100.0 * (candles[end].close - lowest) / range
            }
        })
        .collect();

    let k = *k_values.last()?;
    let d = math::sma(&k_values, d_len)?;

    Some(StochasticIndicator {
        k,
        d,
        k_period,
        d_period,
    })
}

pub fn classify_stochastic(
    stoch: &StochasticIndicator,
    thresholds: &Thresholds,
) -> (Classification, String) {
    let (k, d) = (stoch.k, stoch.d);
    if k > thresholds.stochastic_overbought {
        (
            Classification::Overbought,
            format!("Stochastic %K {:.1} overbought, pullback risk", k),
        )
    } else if k < thresholds.stochastic_oversold {
        (
            Classification::Oversold,
            format!("Stochastic %K {:.1} oversold, bounce potential", k),
        )
    } else if k > d && k < 50.0 {
        (
            Classification::Bullish,
            format!("%K {:.1} above %D {:.1} in lower half", k, d),
        )
    } else if k < d && k > 50.0 {
        (
            Classification::Bearish,
            format!("%K {:.1} below %D {:.1} in upper half", k, d),
        )
    } else {
        (Classification::Neutral, format!("Stochastic %K {:.1}, no signal", k))
    }
}

pub struct Stochastic {
    k_period: u32,
    d_period: u32,
}

impl Stochastic {
    pub fn new(k_period: u32, d_period: u32) -> Self {
        Self { k_period, d_period }
    }
}

impl Indicator for Stochastic {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Stochastic
    }

    fn required_points(&self) -> usize {
        (self.k_period as usize)
            .saturating_add(self.d_period as usize)
            .saturating_sub(1)
    }

    fn evaluate(&self, candles: &[Candle], thresholds: &Thresholds) -> IndicatorResult {
        match calculate_stochastic(candles, self.k_period, self.d_period) {
            Some(stoch) => {
                let (classification, note) = classify_stochastic(&stoch, thresholds);
                IndicatorResult::new(
                    self.kind(),
                    IndicatorValues::Stochastic(stoch),
                    classification,
                    note,
                )
            }
            None => self.insufficient(candles.len()),
        }
    }
}
