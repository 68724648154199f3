//! Multi-timeframe, correlation and regime models.

use serde::{Deserialize, Serialize};

use super::indicators::Bias;
use super::signal::SignalReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    StrongUp,
    Up,
    Sideways,
    Down,
    StrongDown,
    Unknown,
}

/// Analysis of one horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeReport {
    pub horizon: usize,
    pub signal: SignalReport,
    pub trend_direction: TrendDirection,
    pub price_change_percent: f64,
    /// Sample standard deviation of percent returns, in percent.
    pub volatility: f64,
}

/// A horizon that could not be analysed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedHorizon {
    pub horizon: usize,
    pub required: usize,
    pub available: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentAssessment {
    PerfectAlignment(Bias),
    Majority(Bias),
    Mixed,
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// 0-100, one decimal.
    pub score: f64,
    pub assessment: AlignmentAssessment,
    pub bullish_horizons: usize,
    pub bearish_horizons: usize,
    pub neutral_horizons: usize,
    pub total_horizons: usize,
}

impl AlignmentResult {
    /// Majority bias, if one exists.
    pub fn majority(&self) -> Option<Bias> {
        match self.assessment {
            AlignmentAssessment::PerfectAlignment(bias) | AlignmentAssessment::Majority(bias) => {
                Some(bias)
            }
            AlignmentAssessment::Mixed | AlignmentAssessment::InsufficientData => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiTimeframeReport {
    /// Analysed horizons, in request order.
    pub timeframes: Vec<TimeframeReport>,
    pub skipped: Vec<SkippedHorizon>,
    pub alignment: AlignmentResult,
}

impl MultiTimeframeReport {
    pub fn timeframe(&self, horizon: usize) -> Option<&TimeframeReport> {
        self.timeframes.iter().find(|t| t.horizon == horizon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    Independent,
    InsufficientData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationDirection {
    Positive,
    Negative,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Pearson coefficient of percent changes; `None` when data was insufficient.
    pub coefficient: Option<f64>,
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
    pub overlapping_points: usize,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegimeZone {
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
    ExtremeGreed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionSizing {
    Increase,
    NormalToIncrease,
    Normal,
    Reduce,
    Minimize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeResult {
    pub index: f64,
    pub zone: RegimeZone,
    pub sentiment: String,
    pub position_sizing: PositionSizing,
    pub strategy_note: String,
}

/// Combined context for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketContextReport {
    pub timeframes: MultiTimeframeReport,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub correlation: Option<CorrelationResult>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub regime: Option<RegimeResult>,
}
