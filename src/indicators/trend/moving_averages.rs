//! Simple moving averages and the medium/long (golden/death) cross

use crate::common::math;
use crate::config::Thresholds;
use crate::indicators::crossover::find_crossovers;
use crate::indicators::registry::Indicator;
use crate::indicators::trend::ema::calculate_emas;
use crate::models::indicators::{
    AverageCross, Bias, Classification, IndicatorKind, IndicatorResult, IndicatorValues,
    MovingAveragesIndicator, SmaIndicator,
};
use crate::models::series::Candle;

/// Calculate SMA for a specific period
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<SmaIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let value = math::sma(&closes, period as usize)?;
    Some(SmaIndicator { value, period })
}

/// Calculate multiple SMAs at once, skipping periods longer than the input
pub fn calculate_smas(candles: &[Candle], periods: &[u32]) -> Vec<SmaIndicator> {
    periods
        .iter()
        .filter_map(|&period| calculate_sma(candles, period))
        .collect()
}

/// Medium and long windows of the cross pair: the two longest distinct periods.
pub fn cross_pair(periods: &[u32]) -> Option<(u32, u32)> {
    let mut sorted: Vec<u32> = periods.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    match sorted.as_slice() {
        [.., medium, long] => Some((*medium, *long)),
        _ => None,
    }
}

/// Every medium/long cross in the series.
///
/// Each cross is reported at the first candle whose medium average sits on
/// the new side of the long average.
pub fn detect_average_crosses(candles: &[Candle], medium: u32, long: u32) -> Vec<AverageCross> {
    if medium == 0 || medium >= long || candles.len() < long as usize + 1 {
        return Vec::new();
    }
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let medium_series = math::sma_series(&closes, medium as usize);
    let long_series = math::sma_series(&closes, long as usize);

    find_crossovers(&medium_series, &long_series, long as usize - 1)
        .into_iter()
        .map(|(index, crossover)| AverageCross {
            crossover,
            index,
            medium_period: medium,
            long_period: long,
        })
        .collect()
}

pub fn calculate_moving_averages(
    candles: &[Candle],
    sma_periods: &[u32],
    ema_periods: &[u32],
    cross_recency_bars: usize,
) -> Option<MovingAveragesIndicator> {
    let price = candles.last()?.close;
    let smas = calculate_smas(candles, sma_periods);
    if smas.is_empty() {
        return None;
    }
    let emas = calculate_emas(candles, ema_periods);

    let (cross, ordering) = match cross_pair(sma_periods) {
        Some((medium, long)) => {
            let first_recent = candles.len().saturating_sub(cross_recency_bars.max(1));
            let cross = detect_average_crosses(candles, medium, long)
                .into_iter()
                .rev()
                .find(|c| c.index >= first_recent);
            let medium_value = smas.iter().find(|s| s.period == medium).map(|s| s.value);
            let long_value = smas.iter().find(|s| s.period == long).map(|s| s.value);
            let ordering = match (medium_value, long_value) {
                (Some(m), Some(l)) if m > l => Bias::Bullish,
                (Some(m), Some(l)) if m < l => Bias::Bearish,
                _ => Bias::Neutral,
            };
            (cross, ordering)
        }
        None => (None, Bias::Neutral),
    };

    Some(MovingAveragesIndicator {
        price,
        smas,
        emas,
        cross,
        ordering,
    })
}

pub fn classify_moving_averages(ma: &MovingAveragesIndicator) -> (Classification, String) {
    if let Some(cross) = &ma.cross {
        if cross.is_golden() {
            return (
                Classification::StrongBullish,
                format!(
                    "Golden cross: SMA {} crossed above SMA {}",
                    cross.medium_period, cross.long_period
                ),
            );
        }
        if cross.is_death() {
            return (
                Classification::StrongBearish,
                format!(
                    "Death cross: SMA {} crossed below SMA {}",
                    cross.medium_period, cross.long_period
                ),
            );
        }
    }

    if ma.smas.iter().all(|s| ma.price > s.value) {
        return (
            Classification::Bullish,
            format!("Price {:.4} above all {} averages", ma.price, ma.smas.len()),
        );
    }
    if ma.smas.iter().all(|s| ma.price < s.value) {
        return (
            Classification::Bearish,
            format!("Price {:.4} below all {} averages", ma.price, ma.smas.len()),
        );
    }

    match ma.ordering {
        Bias::Bullish => (
            Classification::Bullish,
            "Medium average above long average".to_string(),
        ),
        Bias::Bearish => (
            Classification::Bearish,
            "Medium average below long average".to_string(),
        ),
        Bias::Neutral => (
            Classification::Neutral,
            "Price between its averages".to_string(),
        ),
    }
}

pub struct MovingAverages {
    sma_periods: Vec<u32>,
    ema_periods: Vec<u32>,
}

impl MovingAverages {
    pub fn new(sma_periods: Vec<u32>, ema_periods: Vec<u32>) -> Self {
        Self {
            sma_periods,
            ema_periods,
        }
    }
}

impl Indicator for MovingAverages {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::MovingAverages
    }

    fn required_points(&self) -> usize {
        self.sma_periods.iter().copied().min().unwrap_or(1) as usize
    }

    fn evaluate(&self, candles: &[Candle], thresholds: &Thresholds) -> IndicatorResult {
        match calculate_moving_averages(
            candles,
            &self.sma_periods,
            &self.ema_periods,
            thresholds.cross_recency_bars,
        ) {
            Some(ma) => {
                let (classification, note) = classify_moving_averages(&ma);
                IndicatorResult::new(
                    self.kind(),
                    IndicatorValues::MovingAverages(ma),
                    classification,
                    note,
                )
            }
            None => self.insufficient(candles.len()),
        }
    }
}
