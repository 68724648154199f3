//! Indicator registry and trait system

use crate::config::{AnalysisOptions, Thresholds};
use crate::indicators::momentum::{Macd, Rsi, Stochastic};
use crate::indicators::structure::SupportResistance;
use crate::indicators::trend::{Adx, MovingAverages};
use crate::indicators::volatility::{Atr, Bollinger};
use crate::indicators::volume::{Obv, VolumeRegime};
use crate::models::indicators::{IndicatorKind, IndicatorResult};
use crate::models::series::Candle;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volatility,
    Volume,
    Structure,
}

impl IndicatorKind {
    pub fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorKind::Rsi | IndicatorKind::Macd | IndicatorKind::Stochastic => {
                IndicatorCategory::Momentum
            }
            IndicatorKind::MovingAverages | IndicatorKind::Adx => IndicatorCategory::Trend,
            IndicatorKind::Bollinger | IndicatorKind::Atr => IndicatorCategory::Volatility,
            IndicatorKind::Obv | IndicatorKind::Volume => IndicatorCategory::Volume,
            IndicatorKind::SupportResistance => IndicatorCategory::Structure,
        }
    }
}

/// Trait for all indicators
pub trait Indicator: Send + Sync {
    fn kind(&self) -> IndicatorKind;

    /// Get the category this indicator belongs to
    fn category(&self) -> IndicatorCategory {
        self.kind().category()
    }

    /// Get the name of the indicator
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Points needed before the indicator yields a value.
    fn required_points(&self) -> usize;

    /// Compute and classify. Never fails: short input yields an
    /// `Insufficient` result.
    fn evaluate(&self, candles: &[Candle], thresholds: &Thresholds) -> IndicatorResult;

    fn insufficient(&self, available: usize) -> IndicatorResult {
        IndicatorResult::insufficient(self.kind(), self.required_points(), available)
    }
}

/// Ordered set of configured indicators.
pub struct IndicatorRegistry {
    indicators: Vec<Box<dyn Indicator>>,
}

impl IndicatorRegistry {
    /// Build the standard indicator set from analysis options.
    pub fn from_options(options: &AnalysisOptions) -> Self {
        let indicators: Vec<Box<dyn Indicator>> = vec![
            Box::new(Rsi::new(options.rsi_period)),
            Box::new(Macd::new(
                options.macd_fast,
                options.macd_slow,
                options.macd_signal,
            )),
            Box::new(Stochastic::new(options.stochastic_k, options.stochastic_d)),
            Box::new(MovingAverages::new(
                options.sma_periods.clone(),
                options.ema_periods.clone(),
            )),
            Box::new(Adx::new(options.adx_period)),
            Box::new(Bollinger::new(options.bb_period, options.bb_stddev)),
            Box::new(Atr::new(options.atr_period)),
            Box::new(Obv::new(options.obv_sma_period)),
            Box::new(VolumeRegime::new(options.volume_ma_period)),
            Box::new(SupportResistance::new(options.support_resistance_lookback)),
        ];
        Self { indicators }
    }

    pub fn indicators(&self) -> &[Box<dyn Indicator>] {
        &self.indicators
    }

    /// Evaluate every indicator in registration order.
    pub fn evaluate_all(&self, candles: &[Candle], thresholds: &Thresholds) -> Vec<IndicatorResult> {
        self.indicators
            .iter()
            .map(|indicator| indicator.evaluate(candles, thresholds))
            .collect()
    }

    /// Get all categories
    pub fn all_categories() -> Vec<IndicatorCategory> {
        vec![
            IndicatorCategory::Momentum,
            IndicatorCategory::Trend,
            IndicatorCategory::Volatility,
            IndicatorCategory::Volume,
            IndicatorCategory::Structure,
        ]
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::from_options(&AnalysisOptions::default())
    }
}
