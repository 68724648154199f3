//! Turns indicator results and pattern matches into raw signals.

use crate::models::indicators::{
    Bias, Classification, CrossoverType, IndicatorKind, IndicatorResult, IndicatorValues,
    SpikeMagnitude, VolumeDivergence,
};
use crate::models::pattern::{PatternCategory, PatternMatch};
use crate::models::signal::{MarketState, Signal, SignalKind};

fn directional_bias(classification: Classification) -> Bias {
    match classification {
        Classification::StrongBullish | Classification::Bullish | Classification::Oversold => {
            Bias::Bullish
        }
        Classification::StrongBearish | Classification::Bearish | Classification::Overbought => {
            Bias::Bearish
        }
        _ => Bias::Neutral,
    }
}

/// Market state from the trend-strength reading.
pub fn market_state(results: &[IndicatorResult]) -> MarketState {
    match results.iter().find(|r| r.kind == IndicatorKind::Adx) {
        Some(adx) => match adx.classification {
            Classification::Trending => MarketState::Trending,
            Classification::Ranging => MarketState::Ranging,
            Classification::Insufficient => MarketState::Unknown,
            _ => MarketState::Developing,
        },
        None => MarketState::Unknown,
    }
}

/// Signals emitted by one indicator. Insufficient results emit nothing.
pub fn indicator_signals(result: &IndicatorResult) -> Vec<Signal> {
    if result.is_insufficient() {
        return Vec::new();
    }
    let source = result.name();
    let bias = directional_bias(result.classification);

    match &result.values {
        IndicatorValues::Rsi(_) => {
            let kind = match result.classification {
                Classification::Overbought | Classification::Oversold => {
                    SignalKind::OscillatorExtreme
                }
                _ => SignalKind::MomentumDirection,
            };
            vec![Signal::new(kind, bias, source)]
        }
        IndicatorValues::Macd(macd) => {
            let kind = if macd.crossover == CrossoverType::None {
                SignalKind::MomentumDirection
            } else {
                SignalKind::OscillatorCrossover
            };
            vec![Signal::new(kind, bias, source)]
        }
        IndicatorValues::Stochastic(_) => {
            let kind = match result.classification {
                Classification::Overbought | Classification::Oversold => {
                    SignalKind::OscillatorExtreme
                }
                Classification::Bullish | Classification::Bearish => {
                    SignalKind::OscillatorCrossover
                }
                _ => SignalKind::MomentumDirection,
            };
            vec![Signal::new(kind, bias, source)]
        }
        IndicatorValues::MovingAverages(ma) => {
            let kind = match ma.cross {
                Some(cross) if cross.is_golden() => SignalKind::GoldenCross,
                Some(cross) if cross.is_death() => SignalKind::DeathCross,
                _ => SignalKind::MovingAverageOrder,
            };
            vec![Signal::new(kind, bias, source)]
        }
        // Undirected; the aggregator resolves its side.
        IndicatorValues::Adx(_) => vec![Signal::new(SignalKind::TrendStrength, Bias::Neutral, source)],
        IndicatorValues::Bollinger(_) => {
            let kind = match result.classification {
                Classification::Overbought | Classification::Oversold => SignalKind::BandExtreme,
                _ => SignalKind::BandPosition,
            };
            vec![Signal::new(kind, bias, source)]
        }
        IndicatorValues::Obv(obv) => {
            let mut signals = vec![Signal::new(SignalKind::ObvDirection, bias, source)];
            if let Some(divergence) = obv.divergence {
                signals.push(Signal::new(SignalKind::ObvDivergence, divergence, source));
            }
            signals
        }
        IndicatorValues::Volume(volume) => {
            let mut signals = Vec::new();
            match volume.divergence {
                VolumeDivergence::Confirmation => signals.push(Signal::new(
                    SignalKind::VolumeConfirmation,
                    Bias::Bullish,
                    source,
                )),
                VolumeDivergence::WeakRally | VolumeDivergence::SellingPressure => signals.push(
                    Signal::new(SignalKind::PriceVolumeDivergence, Bias::Bearish, source),
                ),
                VolumeDivergence::WeakMove | VolumeDivergence::NoDivergence => {}
            }
            if volume.spike != SpikeMagnitude::None {
                signals.push(Signal::new(SignalKind::VolumeSpike, Bias::Neutral, source));
            }
            signals
        }
        IndicatorValues::Atr(_)
        | IndicatorValues::SupportResistance(_)
        | IndicatorValues::Insufficient { .. } => Vec::new(),
    }
}

pub fn pattern_signal(pattern: &PatternMatch) -> Signal {
    let kind = match pattern.category {
        PatternCategory::Price => SignalKind::PriceAction,
        PatternCategory::Chart => SignalKind::ChartPattern,
    };
    Signal::new(kind, pattern.bias, format!("{:?}", pattern.pattern))
}

/// Every signal for one analysis, indicators first in registry order, then
/// patterns in detection order.
pub fn collect_signals(results: &[IndicatorResult], patterns: &[PatternMatch]) -> Vec<Signal> {
    results
        .iter()
        .flat_map(indicator_signals)
        .chain(patterns.iter().map(pattern_signal))
        .collect()
}
