//! ATR (Average True Range) indicator

use crate::common::math;
use crate::config::Thresholds;
use crate::indicators::registry::Indicator;
use crate::models::indicators::{
    AtrIndicator, Classification, IndicatorKind, IndicatorResult, IndicatorValues, VolatilityLevel,
};
use crate::models::series::Candle;

/// Calculate ATR (Average True Range)
///
/// ATR is the mean true range over the last `period` bars. The suggested
/// protective stop sits `atr_stop_multiplier` ATRs away from price.
pub fn calculate_atr(candles: &[Candle], period: u32, thresholds: &Thresholds) -> Option<AtrIndicator> {
    if period == 0 || candles.len() < period as usize + 1 {
        return None;
    }

    let tr_values: Vec<f64> = candles
        .windows(2)
        .map(|pair| math::true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect();

    let value = math::sma(&tr_values, period as usize)?;
    let price = candles.last()?.close;
    let atr_pct = if price > 0.0 { value / price * 100.0 } else { 0.0 };

    let volatility = if atr_pct > thresholds.atr_very_high_pct {
        VolatilityLevel::VeryHigh
    } else if atr_pct > thresholds.atr_high_pct {
        VolatilityLevel::High
    } else if atr_pct > thresholds.atr_moderate_pct {
        VolatilityLevel::Moderate
    } else {
        VolatilityLevel::Low
    };

    Some(AtrIndicator {
        value,
        period,
        atr_pct,
        volatility,
        suggested_stop_distance: value * thresholds.atr_stop_multiplier,
        suggested_stop_pct: atr_pct * thresholds.atr_stop_multiplier,
    })
}

fn volatility_note(atr: &AtrIndicator) -> String {
    let level = match atr.volatility {
        VolatilityLevel::VeryHigh => "very high volatility, use wider stops and smaller positions",
        VolatilityLevel::High => "high volatility, expect larger swings",
        VolatilityLevel::Moderate => "moderate volatility",
        VolatilityLevel::Low => "low volatility, tight range",
    };
    format!(
        "ATR {:.2}% of price: {}; suggested stop {:.2}% away",
        atr.atr_pct, level, atr.suggested_stop_pct
    )
}

pub struct Atr {
    period: u32,
}

impl Atr {
    pub fn new(period: u32) -> Self {
        Self { period }
    }
}

impl Indicator for Atr {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Atr
    }

    fn required_points(&self) -> usize {
        self.period as usize + 1
    }

    fn evaluate(&self, candles: &[Candle], thresholds: &Thresholds) -> IndicatorResult {
        match calculate_atr(candles, self.period, thresholds) {
            Some(atr) => {
                let note = volatility_note(&atr);
                IndicatorResult::new(
                    self.kind(),
                    IndicatorValues::Atr(atr),
                    Classification::Neutral,
                    note,
                )
            }
            None => self.insufficient(candles.len()),
        }
    }
}
