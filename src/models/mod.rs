//! Shared data models spanning the engine layers.

pub mod context;
pub mod indicators;
pub mod pattern;
pub mod series;
pub mod signal;

pub use context::{
    AlignmentAssessment, AlignmentResult, CorrelationDirection, CorrelationResult,
    CorrelationStrength, MarketContextReport, MultiTimeframeReport, PositionSizing, RegimeResult,
    RegimeZone, SkippedHorizon, TimeframeReport, TrendDirection,
};
pub use indicators::{
    AdxIndicator, AtrIndicator, AverageCross, Bias, BollingerBandsIndicator, Classification,
    CrossoverType, EmaIndicator, FlowTrend, IndicatorKind, IndicatorResult, IndicatorValues,
    MacdIndicator, MovingAveragesIndicator, ObvIndicator, Proximity, RsiIndicator, SmaIndicator,
    SpikeMagnitude, StochasticIndicator, SupportResistanceIndicator, TrendStrength,
    VolatilityLevel, VolumeAssessment, VolumeDivergence, VolumeIndicator, VolumeLevel,
};
pub use pattern::{PatternCategory, PatternId, PatternMatch};
pub use series::{Candle, PriceSeries};
pub use signal::{MarketState, Signal, SignalContribution, SignalKind, SignalReport};
