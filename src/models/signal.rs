use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::indicators::{Bias, IndicatorResult};
use super::pattern::PatternMatch;

/// Every kind of signal the aggregator knows how to weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    GoldenCross,
    DeathCross,
    PriceVolumeDivergence,
    ObvDivergence,
    ChartPattern,
    OscillatorCrossover,
    OscillatorExtreme,
    BandExtreme,
    VolumeConfirmation,
    TrendStrength,
    ObvDirection,
    PriceAction,
    MovingAverageOrder,
    MomentumDirection,
    BandPosition,
    VolumeSpike,
}

impl SignalKind {
    /// Kinds that follow the prevailing trend and lose weight in a ranging market.
    pub fn is_trend_following(&self) -> bool {
        matches!(
            self,
            SignalKind::MovingAverageOrder
                | SignalKind::TrendStrength
                | SignalKind::PriceAction
                | SignalKind::MomentumDirection
        )
    }
}

/// Raw directional reading emitted by an indicator or pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub bias: Bias,
    pub source: String,
}

impl Signal {
    pub fn new(kind: SignalKind, bias: Bias, source: impl Into<String>) -> Self {
        Self {
            kind,
            bias,
            source: source.into(),
        }
    }
}

/// A signal after the weight table and market state were applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalContribution {
    pub kind: SignalKind,
    pub bias: Bias,
    pub weight: f64,
    pub source: String,
}

/// Trend regime inferred from the trend-strength index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketState {
    Trending,
    Developing,
    Ranging,
    Unknown,
}

/// Aggregate output of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    /// Timestamp of the last analysed candle.
    pub as_of: DateTime<Utc>,
    pub price: f64,
    pub points: usize,
    pub indicators: Vec<IndicatorResult>,
    pub patterns: Vec<PatternMatch>,
    pub contributions: Vec<SignalContribution>,
    pub market_state: MarketState,
    pub overall_bias: Bias,
    pub confidence_percent: f64,
    pub bullish_count: usize,
    pub bearish_count: usize,
    pub neutral_count: usize,
    pub bullish_weight: f64,
    pub bearish_weight: f64,
    pub neutral_weight: f64,
}

impl SignalReport {
    pub fn indicator(&self, kind: super::indicators::IndicatorKind) -> Option<&IndicatorResult> {
        self.indicators.iter().find(|r| r.kind == kind)
    }
}
