//! Unit tests for weighted signal aggregation

use signalscope::config::Thresholds;
use signalscope::models::indicators::Bias;
use signalscope::models::signal::{MarketState, Signal, SignalKind};
use signalscope::signals::{Aggregator, WeightTable};

fn signal(kind: SignalKind, bias: Bias) -> Signal {
    Signal::new(kind, bias, "test")
}

#[test]
fn test_golden_cross_outweighs_momentum() {
    let weights = WeightTable::default();
    let thresholds = Thresholds::default();
    let tally = Aggregator::new(&weights, &thresholds).aggregate(
        &[
            signal(SignalKind::GoldenCross, Bias::Bullish),
            signal(SignalKind::MomentumDirection, Bias::Bearish),
        ],
        MarketState::Developing,
    );
    assert_eq!(tally.overall_bias, Bias::Bullish);
    assert_eq!(tally.bullish_weight, 3.0);
    assert_eq!(tally.bearish_weight, 1.0);
    assert_eq!(tally.confidence_percent, 75.0);
    assert_eq!(tally.bullish_count, 1);
    assert_eq!(tally.bearish_count, 1);
    assert_eq!(tally.contributions.len(), 2);
}

#[test]
fn test_ranging_market_discounts_trend_following() {
    let weights = WeightTable::default();
    let thresholds = Thresholds::default();
    let aggregator = Aggregator::new(&weights, &thresholds);
    assert_eq!(
        aggregator.weight_for(SignalKind::MovingAverageOrder, MarketState::Ranging),
        0.5
    );
    assert_eq!(
        aggregator.weight_for(SignalKind::MovingAverageOrder, MarketState::Trending),
        1.0
    );
    assert_eq!(
        aggregator.weight_for(SignalKind::GoldenCross, MarketState::Ranging),
        3.0
    );
}

#[test]
fn test_trend_strength_joins_leading_side_when_trending() {
    let weights = WeightTable::default();
    let thresholds = Thresholds::default();
    let tally = Aggregator::new(&weights, &thresholds).aggregate(
        &[
            signal(SignalKind::TrendStrength, Bias::Neutral),
            signal(SignalKind::OscillatorExtreme, Bias::Bearish),
        ],
        MarketState::Trending,
    );
    assert_eq!(tally.contributions[0].bias, Bias::Bearish);
    assert_eq!(tally.bearish_weight, 3.0);
    assert_eq!(tally.bearish_count, 2);
    assert_eq!(tally.confidence_percent, 100.0);
}

#[test]
fn test_trend_strength_is_neutral_otherwise() {
    let weights = WeightTable::default();
    let thresholds = Thresholds::default();
    let tally = Aggregator::new(&weights, &thresholds).aggregate(
        &[
            signal(SignalKind::TrendStrength, Bias::Neutral),
            signal(SignalKind::OscillatorExtreme, Bias::Bullish),
        ],
        MarketState::Developing,
    );
    assert_eq!(tally.contributions[0].bias, Bias::Neutral);
    assert_eq!(tally.neutral_weight, 1.0);
    assert_eq!(tally.confidence_percent, 66.7);
}

#[test]
fn test_tie_is_neutral() {
    let weights = WeightTable::default();
    let thresholds = Thresholds::default();
    let tally = Aggregator::new(&weights, &thresholds).aggregate(
        &[
            signal(SignalKind::GoldenCross, Bias::Bullish),
            signal(SignalKind::DeathCross, Bias::Bearish),
        ],
        MarketState::Unknown,
    );
    assert_eq!(tally.overall_bias, Bias::Neutral);
    assert_eq!(tally.confidence_percent, 50.0);
}

#[test]
fn test_no_signals() {
    let weights = WeightTable::default();
    let thresholds = Thresholds::default();
    let tally = Aggregator::new(&weights, &thresholds).aggregate(&[], MarketState::Unknown);
    assert_eq!(tally.overall_bias, Bias::Neutral);
    assert_eq!(tally.confidence_percent, 0.0);
    assert!(tally.contributions.is_empty());
}

#[test]
fn test_custom_weights_change_outcome() {
    let weights = WeightTable::default().with_weight(SignalKind::MomentumDirection, 4.0);
    let thresholds = Thresholds::default();
    let tally = Aggregator::new(&weights, &thresholds).aggregate(
        &[
            signal(SignalKind::GoldenCross, Bias::Bullish),
            signal(SignalKind::MomentumDirection, Bias::Bearish),
        ],
        MarketState::Developing,
    );
    assert_eq!(tally.overall_bias, Bias::Bearish);
}

#[test]
fn test_zero_weight_signal_still_earns_floor() {
    let weights = WeightTable::default().with_weight(SignalKind::GoldenCross, 0.0);
    let thresholds = Thresholds::default();
    let tally = Aggregator::new(&weights, &thresholds).aggregate(
        &[signal(SignalKind::GoldenCross, Bias::Bullish)],
        MarketState::Developing,
    );
    assert_eq!(tally.bullish_count, 1);
    assert_eq!(tally.bullish_weight, 0.0);
    assert_eq!(tally.overall_bias, Bias::Neutral);
    assert_eq!(tally.confidence_percent, thresholds.min_confidence);
}
