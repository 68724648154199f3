//! Exponential averages reported next to the simple ones.

use crate::common::math;
use crate::models::indicators::EmaIndicator;
use crate::models::series::Candle;

fn ema_of(closes: &[f64], period: u32) -> Option<EmaIndicator> {
    if period == 0 {
        return None;
    }
    math::ema(closes, period as usize).map(|value| EmaIndicator { value, period })
}

/// EMA of the closes, seeded with the SMA of the first `period` values.
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<EmaIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    ema_of(&closes, period)
}

/// One reading per requested period; periods longer than the series are left out.
pub fn calculate_emas(candles: &[Candle], periods: &[u32]) -> Vec<EmaIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    periods
        .iter()
        .filter_map(|&period| ema_of(&closes, period))
        .collect()
}
