//! Signal weights as a declarative table

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::signal::SignalKind;

/// Default tier weights.
pub struct TierWeights;

impl TierWeights {
    pub const TIER_3: f64 = 3.0;
    pub const TIER_2: f64 = 2.0;
    pub const TIER_1: f64 = 1.0;

    /// Default weight of a signal kind.
    pub fn get(kind: SignalKind) -> f64 {
        match kind {
            SignalKind::GoldenCross
            | SignalKind::DeathCross
            | SignalKind::PriceVolumeDivergence
            | SignalKind::ObvDivergence
            | SignalKind::ChartPattern => Self::TIER_3,
            SignalKind::OscillatorCrossover
            | SignalKind::OscillatorExtreme
            | SignalKind::BandExtreme
            | SignalKind::VolumeConfirmation => Self::TIER_2,
            SignalKind::TrendStrength
            | SignalKind::ObvDirection
            | SignalKind::PriceAction
            | SignalKind::MovingAverageOrder
            | SignalKind::MomentumDirection
            | SignalKind::BandPosition
            | SignalKind::VolumeSpike => Self::TIER_1,
        }
    }
}

pub const ALL_SIGNAL_KINDS: [SignalKind; 16] = [
    SignalKind::GoldenCross,
    SignalKind::DeathCross,
    SignalKind::PriceVolumeDivergence,
    SignalKind::ObvDivergence,
    SignalKind::ChartPattern,
    SignalKind::OscillatorCrossover,
    SignalKind::OscillatorExtreme,
    SignalKind::BandExtreme,
    SignalKind::VolumeConfirmation,
    SignalKind::TrendStrength,
    SignalKind::ObvDirection,
    SignalKind::PriceAction,
    SignalKind::MovingAverageOrder,
    SignalKind::MomentumDirection,
    SignalKind::BandPosition,
    SignalKind::VolumeSpike,
];

/// Signal kind to weight. Kinds missing from a loaded table fall back to
/// their tier default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    weights: BTreeMap<SignalKind, f64>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            weights: ALL_SIGNAL_KINDS
                .iter()
                .map(|kind| (*kind, TierWeights::get(*kind)))
                .collect(),
        }
    }
}

impl WeightTable {
    pub fn with_weight(mut self, kind: SignalKind, weight: f64) -> Self {
        self.weights.insert(kind, weight);
        self
    }

    pub fn weight(&self, kind: SignalKind) -> f64 {
        self.weights
            .get(&kind)
            .copied()
            .unwrap_or_else(|| TierWeights::get(kind))
    }

    pub fn validate(&self) -> Result<()> {
        match self
            .weights
            .iter()
            .find(|(_, weight)| !(weight.is_finite() && **weight >= 0.0))
        {
            Some((kind, weight)) => Err(EngineError::InvalidConfig(format!(
                "weight for {:?} must be a non-negative number, got {}",
                kind, weight
            ))),
            None => Ok(()),
        }
    }
}
