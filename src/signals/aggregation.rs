//! Weighted tally of raw signals

use crate::config::Thresholds;
use crate::models::indicators::Bias;
use crate::models::signal::{MarketState, Signal, SignalContribution, SignalKind};
use crate::signals::scoring::{calculate_confidence, overall_bias};
use crate::signals::weights::WeightTable;

/// Outcome of aggregating one analysis' signals.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    pub contributions: Vec<SignalContribution>,
    pub bullish_weight: f64,
    pub bearish_weight: f64,
    pub neutral_weight: f64,
    pub bullish_count: usize,
    pub bearish_count: usize,
    pub neutral_count: usize,
    pub overall_bias: Bias,
    pub confidence_percent: f64,
}

/// Aggregate signals into a weighted tally
pub struct Aggregator<'a> {
    weights: &'a WeightTable,
    thresholds: &'a Thresholds,
}

impl<'a> Aggregator<'a> {
    pub fn new(weights: &'a WeightTable, thresholds: &'a Thresholds) -> Self {
        Self {
            weights,
            thresholds,
        }
    }

    /// Weight of one signal under the given market state.
    pub fn weight_for(&self, kind: SignalKind, state: MarketState) -> f64 {
        let weight = self.weights.weight(kind);
        if state == MarketState::Ranging && kind.is_trend_following() {
            weight * self.thresholds.ranging_discount
        } else {
            weight
        }
    }

    /// Weight every signal and tally the three sides.
    ///
    /// Trend-strength signals carry no direction of their own. In a trending
    /// market they join whichever side leads the other signals; otherwise
    /// they count as neutral.
    pub fn aggregate(&self, signals: &[Signal], state: MarketState) -> Tally {
        let mut lead_bull = 0.0;
        let mut lead_bear = 0.0;
        for signal in signals.iter().filter(|s| s.kind != SignalKind::TrendStrength) {
            match signal.bias {
                Bias::Bullish => lead_bull += self.weight_for(signal.kind, state),
                Bias::Bearish => lead_bear += self.weight_for(signal.kind, state),
                Bias::Neutral => {}
            }
        }
        let trend_side = if state == MarketState::Trending {
            overall_bias(lead_bull, lead_bear)
        } else {
            Bias::Neutral
        };

        let contributions: Vec<SignalContribution> = signals
            .iter()
            .map(|signal| SignalContribution {
                kind: signal.kind,
                bias: if signal.kind == SignalKind::TrendStrength {
                    trend_side
                } else {
                    signal.bias
                },
                weight: self.weight_for(signal.kind, state),
                source: signal.source.clone(),
            })
            .collect();

        let mut tally = Tally {
            contributions: Vec::new(),
            bullish_weight: 0.0,
            bearish_weight: 0.0,
            neutral_weight: 0.0,
            bullish_count: 0,
            bearish_count: 0,
            neutral_count: 0,
            overall_bias: Bias::Neutral,
            confidence_percent: 0.0,
        };
        for contribution in &contributions {
            match contribution.bias {
                Bias::Bullish => {
                    tally.bullish_weight += contribution.weight;
                    tally.bullish_count += 1;
                }
                Bias::Bearish => {
                    tally.bearish_weight += contribution.weight;
                    tally.bearish_count += 1;
                }
                Bias::Neutral => {
                    tally.neutral_weight += contribution.weight;
                    tally.neutral_count += 1;
                }
            }
        }
        tally.overall_bias = overall_bias(tally.bullish_weight, tally.bearish_weight);
        tally.confidence_percent = calculate_confidence(
            tally.bullish_weight,
            tally.bearish_weight,
            tally.neutral_weight,
            contributions.len(),
            self.thresholds.min_confidence,
        );
        tally.contributions = contributions;
        tally
    }
}
