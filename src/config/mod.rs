//! Engine configuration: indicator periods, classification thresholds,
//! regime bands and signal weights.
//!
//! Every struct carries `#[serde(default)]`, so callers can load partial JSON
//! and keep the defaults for anything they leave out.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::signals::weights::WeightTable;
use crate::validation::ValidationConfig;

/// Read the deployment environment from `APP_ENV` (a `.env` file is honoured).
pub fn get_environment() -> String {
    dotenvy::dotenv().ok();
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Indicator periods requested by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub rsi_period: u32,
    pub macd_fast: u32,
    pub macd_slow: u32,
    pub macd_signal: u32,
    pub bb_period: u32,
    pub bb_stddev: f64,
    /// Simple average windows; the two longest form the medium/long cross pair.
    pub sma_periods: Vec<u32>,
    pub ema_periods: Vec<u32>,
    pub support_resistance_lookback: u32,
    pub stochastic_k: u32,
    pub stochastic_d: u32,
    pub adx_period: u32,
    pub atr_period: u32,
    pub volume_ma_period: u32,
    pub obv_sma_period: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bb_period: 20,
            bb_stddev: 2.0,
            sma_periods: vec![20, 50, 200],
            ema_periods: vec![12, 26, 50],
            support_resistance_lookback: 20,
            stochastic_k: 14,
            stochastic_d: 3,
            adx_period: 14,
            atr_period: 14,
            volume_ma_period: 20,
            obv_sma_period: 20,
        }
    }
}

impl AnalysisOptions {
    /// Minimum series length demanded by the longest requested window.
    ///
    /// Secondary indicators (stochastic, ADX, ATR, OBV, volume) are not part
    /// of this bound; they degrade to `Insufficient` on their own.
    pub fn min_required_points(&self) -> usize {
        let longest_sma = self.sma_periods.iter().copied().max().unwrap_or(0) as usize;
        [
            self.rsi_period as usize + 1,
            (self.macd_slow as usize).saturating_add(self.macd_signal as usize),
            self.bb_period as usize,
            longest_sma,
            self.support_resistance_lookback as usize,
        ]
        .into_iter()
        .max()
        .unwrap_or(1)
        .max(1)
    }

    pub fn validate(&self) -> Result<()> {
        let named = [
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("bb_period", self.bb_period),
            ("support_resistance_lookback", self.support_resistance_lookback),
            ("stochastic_k", self.stochastic_k),
            ("stochastic_d", self.stochastic_d),
            ("adx_period", self.adx_period),
            ("atr_period", self.atr_period),
            ("volume_ma_period", self.volume_ma_period),
            ("obv_sma_period", self.obv_sma_period),
        ];
        if let Some((name, _)) = named.iter().find(|(_, value)| *value == 0) {
            return Err(EngineError::InvalidConfig(format!("{} must be positive", name)));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(EngineError::InvalidConfig(format!(
                "macd_fast ({}) must be shorter than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }
        if self.bb_period < 2 {
            return Err(EngineError::InvalidConfig(
                "bb_period must be at least 2".to_string(),
            ));
        }
        if !(self.bb_stddev.is_finite() && self.bb_stddev > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "bb_stddev must be positive, got {}",
                self.bb_stddev
            )));
        }
        if self.sma_periods.is_empty() || self.sma_periods.contains(&0) {
            return Err(EngineError::InvalidConfig(
                "sma_periods must be non-empty and positive".to_string(),
            ));
        }
        if self.ema_periods.contains(&0) {
            return Err(EngineError::InvalidConfig(
                "ema_periods must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Fixed classification boundaries, injectable so tests and callers can probe
/// or tune them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub rsi_midpoint: f64,
    pub stochastic_overbought: f64,
    pub stochastic_oversold: f64,
    pub adx_trending: f64,
    pub adx_ranging: f64,
    pub adx_very_strong: f64,
    pub bollinger_high_volatility_width: f64,
    pub atr_very_high_pct: f64,
    pub atr_high_pct: f64,
    pub atr_moderate_pct: f64,
    pub atr_stop_multiplier: f64,
    pub volume_extreme_ratio: f64,
    pub volume_very_high_ratio: f64,
    pub volume_high_ratio: f64,
    pub volume_low_ratio: f64,
    pub spike_extreme_ratio: f64,
    pub spike_significant_ratio: f64,
    pub support_resistance_near_pct: f64,
    /// Bars back from the latest one in which a golden/death cross still counts.
    pub cross_recency_bars: usize,
    pub price_action_window: usize,
    pub strong_trend_run: usize,
    pub exhaustion_run: usize,
    pub reversal_move_pct: f64,
    pub indecision_prior_move_pct: f64,
    pub indecision_move_pct: f64,
    pub chart_window: usize,
    pub double_extreme_tolerance_pct: f64,
    pub consolidation_ratio: f64,
    pub breakout_pct: f64,
    pub channel_window: usize,
    pub channel_deviation_pct: f64,
    /// Multiplier applied to trend-following signals in a ranging market.
    pub ranging_discount: f64,
    /// Lowest confidence reported once any signal has fired.
    pub min_confidence: f64,
    pub trend_window: usize,
    pub strong_trend_slope_pct: f64,
    pub correlation_min_points: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            rsi_midpoint: 50.0,
            stochastic_overbought: 80.0,
            stochastic_oversold: 20.0,
            adx_trending: 25.0,
            adx_ranging: 20.0,
            adx_very_strong: 50.0,
            bollinger_high_volatility_width: 10.0,
            atr_very_high_pct: 5.0,
            atr_high_pct: 3.0,
            atr_moderate_pct: 1.5,
            atr_stop_multiplier: 2.0,
            volume_extreme_ratio: 2.5,
            volume_very_high_ratio: 2.0,
            volume_high_ratio: 1.5,
            volume_low_ratio: 0.5,
            spike_extreme_ratio: 3.0,
            spike_significant_ratio: 2.0,
            support_resistance_near_pct: 2.0,
            cross_recency_bars: 1,
            price_action_window: 10,
            strong_trend_run: 3,
            exhaustion_run: 5,
            reversal_move_pct: 3.0,
            indecision_prior_move_pct: 2.0,
            indecision_move_pct: 0.5,
            chart_window: 20,
            double_extreme_tolerance_pct: 2.0,
            consolidation_ratio: 0.5,
            breakout_pct: 1.0,
            channel_window: 10,
            channel_deviation_pct: 2.0,
            ranging_discount: 0.5,
            min_confidence: 5.0,
            trend_window: 10,
            strong_trend_slope_pct: 1.0,
            correlation_min_points: 10,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<()> {
        if self.rsi_oversold >= self.rsi_overbought {
            return Err(EngineError::InvalidConfig(
                "rsi_oversold must be below rsi_overbought".to_string(),
            ));
        }
        if self.stochastic_oversold >= self.stochastic_overbought {
            return Err(EngineError::InvalidConfig(
                "stochastic_oversold must be below stochastic_overbought".to_string(),
            ));
        }
        if self.adx_ranging > self.adx_trending {
            return Err(EngineError::InvalidConfig(
                "adx_ranging must not exceed adx_trending".to_string(),
            ));
        }
        if self.strong_trend_run == 0 || self.exhaustion_run < self.strong_trend_run {
            return Err(EngineError::InvalidConfig(
                "exhaustion_run must be at least strong_trend_run, which must be positive"
                    .to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.ranging_discount) {
            return Err(EngineError::InvalidConfig(
                "ranging_discount must lie in [0, 1]".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.min_confidence) {
            return Err(EngineError::InvalidConfig(
                "min_confidence must lie in [0, 100]".to_string(),
            ));
        }
        if self.correlation_min_points < 2 {
            return Err(EngineError::InvalidConfig(
                "correlation_min_points must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}

/// Upper edges of the sentiment zones; the last zone runs to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegimeBands {
    pub extreme_fear: f64,
    pub fear: f64,
    pub neutral: f64,
    pub greed: f64,
}

impl Default for RegimeBands {
    fn default() -> Self {
        Self {
            extreme_fear: 20.0,
            fear: 40.0,
            neutral: 60.0,
            greed: 80.0,
        }
    }
}

impl RegimeBands {
    pub fn validate(&self) -> Result<()> {
        let edges = [self.extreme_fear, self.fear, self.neutral, self.greed];
        let ascending = edges.windows(2).all(|w| w[0] < w[1]);
        if !ascending || edges[0] <= 0.0 || edges[3] >= 100.0 {
            return Err(EngineError::InvalidConfig(format!(
                "regime bands must ascend strictly inside (0, 100), got {:?}",
                edges
            )));
        }
        Ok(())
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub options: AnalysisOptions,
    pub thresholds: Thresholds,
    pub regime: RegimeBands,
    pub weights: WeightTable,
    pub validation: ValidationConfig,
}

impl EngineConfig {
    pub fn with_options(options: AnalysisOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.options.validate()?;
        self.thresholds.validate()?;
        self.regime.validate()?;
        self.validation.validate()?;
        self.weights.validate()
    }
}
