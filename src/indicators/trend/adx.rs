//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::config::Thresholds;
use crate::indicators::registry::Indicator;
use crate::models::indicators::{
    AdxIndicator, Classification, IndicatorKind, IndicatorResult, IndicatorValues, TrendStrength,
};
use crate::models::series::Candle;

/// Calculate ADX indicator
///
/// ADX measures trend strength regardless of direction. +DI/-DI are the
/// rolling means of directional movement over the rolling mean true range;
/// ADX is the mean of the last `period` DX readings.
pub fn calculate_adx(candles: &[Candle], period: u32, thresholds: &Thresholds) -> Option<AdxIndicator> {
    let len = period as usize;
    if len == 0 || candles.len() < len * 2 {
        return None;
    }

    let mut tr_values = Vec::with_capacity(candles.len() - 1);
    let mut plus_dm_values = Vec::with_capacity(candles.len() - 1);
    let mut minus_dm_values = Vec::with_capacity(candles.len() - 1);

    for pair in candles.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        tr_values.push(math::true_range(cur.high, cur.low, prev.close));

        let up_move = cur.high - prev.high;
        let down_move = prev.low - cur.low;
        plus_dm_values.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm_values.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    let tr_smooth = math::sma_series(&tr_values, len);
    let plus_smooth = math::sma_series(&plus_dm_values, len);
    let minus_smooth = math::sma_series(&minus_dm_values, len);

    let mut plus_di = 0.0;
    let mut minus_di = 0.0;
    let dx_values: Vec<f64> = tr_smooth
        .iter()
        .zip(plus_smooth.iter().zip(&minus_smooth))
        .map(|(&tr, (&plus, &minus))| {
            plus_di = if tr > 0.0 { 100.0 * plus / tr } else { 0.0 };
            minus_di = if tr > 0.0 { 100.0 * minus / tr } else { 0.0 };
            let di_sum = plus_di + minus_di;
            if di_sum > 0.0 {
                100.0 * (plus_di - minus_di).abs() / di_sum
            } else {
                0.0
            }
        })
        .collect();

    let value = math::sma(&dx_values, len)?;

    Some(AdxIndicator {
        value,
        plus_di,
        minus_di,
        period,
        strength: trend_strength(value, thresholds),
    })
}

pub fn trend_strength(value: f64, thresholds: &Thresholds) -> TrendStrength {
    if value > thresholds.adx_very_strong {
        TrendStrength::VeryStrong
    } else if value >= thresholds.adx_trending {
        TrendStrength::Strong
    } else if value >= thresholds.adx_ranging {
        TrendStrength::Moderate
    } else {
        TrendStrength::Weak
    }
}

pub fn classify_adx(adx: &AdxIndicator, thresholds: &Thresholds) -> (Classification, String) {
    if adx.value >= thresholds.adx_trending {
        (
            Classification::Trending,
            format!("ADX {:.1}: tradeable trend, suited to trend-following", adx.value),
        )
    } else if adx.value < thresholds.adx_ranging {
        (
            Classification::Ranging,
            format!("ADX {:.1}: ranging market, trend signals down-weighted", adx.value),
        )
    } else {
        (
            Classification::Neutral,
            format!("ADX {:.1}: trend developing", adx.value),
        )
    }
}

pub struct Adx {
    period: u32,
}

impl Adx {
    pub fn new(period: u32) -> Self {
        Self { period }
    }
}

impl Indicator for Adx {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Adx
    }

    fn required_points(&self) -> usize {
        self.period as usize * 2
    }

    fn evaluate(&self, candles: &[Candle], thresholds: &Thresholds) -> IndicatorResult {
        match calculate_adx(candles, self.period, thresholds) {
            Some(adx) => {
                let (classification, note) = classify_adx(&adx, thresholds);
                IndicatorResult::new(self.kind(), IndicatorValues::Adx(adx), classification, note)
            }
            None => self.insufficient(candles.len()),
        }
    }
}
