use serde::{Deserialize, Serialize};

use super::indicators::Bias;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// Short-run runs and reversals of consecutive moves.
    Price,
    /// Classical chart geometry.
    Chart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternId {
    StrongUptrend,
    StrongDowntrend,
    Exhaustion,
    BullishReversal,
    BearishReversal,
    Indecision,
    DoubleTop,
    DoubleBottom,
    Consolidation,
    UpsideBreakout,
    DownsideBreakdown,
    RisingChannel,
    FallingChannel,
}

impl PatternId {
    pub fn category(&self) -> PatternCategory {
        match self {
            PatternId::StrongUptrend
            | PatternId::StrongDowntrend
            | PatternId::Exhaustion
            | PatternId::BullishReversal
            | PatternId::BearishReversal
            | PatternId::Indecision => PatternCategory::Price,
            _ => PatternCategory::Chart,
        }
    }
}

/// A detected pattern occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub pattern: PatternId,
    pub category: PatternCategory,
    pub bias: Bias,
    /// Index of the candle that completed the pattern.
    pub detected_at: usize,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_level: Option<f64>,
}

impl PatternMatch {
    pub fn new(pattern: PatternId, bias: Bias, detected_at: usize, note: impl Into<String>) -> Self {
        Self {
            pattern,
            category: pattern.category(),
            bias,
            detected_at,
            note: note.into(),
            price_level: None,
        }
    }

    pub fn with_price_level(mut self, level: f64) -> Self {
        self.price_level = Some(level);
        self
    }
}
