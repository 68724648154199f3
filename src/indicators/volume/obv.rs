//! OBV (On-Balance Volume) indicator

use crate::common::math;
use crate::config::Thresholds;
use crate::indicators::registry::Indicator;
use crate::models::indicators::{
    Bias, Classification, FlowTrend, IndicatorKind, IndicatorResult, IndicatorValues, ObvIndicator,
};
use crate::models::series::Candle;

/// Cumulative OBV series: volume is added on up closes, subtracted on down
/// closes, carried on unchanged closes.
pub fn obv_series(candles: &[Candle]) -> Vec<f64> {
    let mut series = Vec::with_capacity(candles.len());
    let mut obv = 0.0;
    series.push(obv);
    for pair in candles.windows(2) {
        if pair[1].close > pair[0].close {
            obv += pair[1].volume;
        } else if pair[1].close < pair[0].close {
            obv -= pair[1].volume;
        }
        series.push(obv);
    }
    series
}

/// Calculate OBV with its moving average, slope direction and price divergence.
///
/// Rising OBV under a falling price is a bullish divergence, falling OBV under
/// a rising price a bearish one.
pub fn calculate_obv(candles: &[Candle], sma_period: u32, slope_window: usize) -> Option<ObvIndicator> {
    let required = (sma_period as usize).max(slope_window).max(2);
    if sma_period == 0 || candles.len() < required {
        return None;
    }

    let series = obv_series(candles);
    let value = *series.last()?;
    let sma = math::sma(&series, sma_period as usize)?;

    let obv_slope = math::linear_slope(&series[series.len() - slope_window.max(2)..])?;
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let price_slope = math::linear_slope(&closes[closes.len() - slope_window.max(2)..])?;

    let trend = FlowTrend::from_slope(obv_slope);
    let divergence = match (FlowTrend::from_slope(price_slope), trend) {
        (FlowTrend::Rising, FlowTrend::Falling) => Some(Bias::Bearish),
        (FlowTrend::Falling, FlowTrend::Rising) => Some(Bias::Bullish),
        _ => None,
    };

    Some(ObvIndicator {
        value,
        sma,
        trend,
        divergence,
    })
}

pub fn classify_obv(obv: &ObvIndicator) -> (Classification, String) {
    let divergence_note = match obv.divergence {
        Some(Bias::Bullish) => "; price falling while OBV rises, potential reversal",
        Some(Bias::Bearish) => "; price rising while OBV falls, weak rally",
        _ => "",
    };
    if obv.value > obv.sma && obv.trend == FlowTrend::Rising {
        (
            Classification::Bullish,
            format!("OBV rising, accumulation{}", divergence_note),
        )
    } else if obv.value < obv.sma && obv.trend == FlowTrend::Falling {
        (
            Classification::Bearish,
            format!("OBV falling, distribution{}", divergence_note),
        )
    } else {
        (
            Classification::Neutral,
            format!("OBV trend unclear{}", divergence_note),
        )
    }
}

pub struct Obv {
    sma_period: u32,
}

impl Obv {
    pub fn new(sma_period: u32) -> Self {
        Self { sma_period }
    }
}

impl Indicator for Obv {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Obv
    }

    fn required_points(&self) -> usize {
        self.sma_period as usize
    }

    fn evaluate(&self, candles: &[Candle], thresholds: &Thresholds) -> IndicatorResult {
        let required = self.required_points().max(thresholds.trend_window).max(2);
        match calculate_obv(candles, self.sma_period, thresholds.trend_window) {
            Some(obv) => {
                let (classification, note) = classify_obv(&obv);
                IndicatorResult::new(self.kind(), IndicatorValues::Obv(obv), classification, note)
            }
            None => IndicatorResult::insufficient(self.kind(), required, candles.len()),
        }
    }
}
