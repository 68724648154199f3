//! Price-action patterns built from consecutive percent moves.

use crate::common::math;
use crate::config::Thresholds;
use crate::models::indicators::Bias;
use crate::models::pattern::{PatternId, PatternMatch};
use crate::models::series::Candle;

/// Length and direction of the trailing run of same-direction moves.
///
/// A zero move ends the run.
pub fn trailing_run(changes: &[f64]) -> (usize, Bias) {
    let Some(&last) = changes.last() else {
        return (0, Bias::Neutral);
    };
    let direction = if last > 0.0 {
        Bias::Bullish
    } else if last < 0.0 {
        Bias::Bearish
    } else {
        return (0, Bias::Neutral);
    };
    let run = changes
        .iter()
        .rev()
        .take_while(|c| match direction {
            Bias::Bullish => **c > 0.0,
            _ => **c < 0.0,
        })
        .count();
    (run, direction)
}

/// Detect runs, exhaustion, reversals and indecision over the last
/// `price_action_window` moves.
pub fn detect_price_patterns(candles: &[Candle], thresholds: &Thresholds) -> Vec<PatternMatch> {
    if candles.len() < 3 {
        return Vec::new();
    }
    let detected_at = candles.len() - 1;
    let start = candles
        .len()
        .saturating_sub(thresholds.price_action_window.max(2) + 1);
    let closes: Vec<f64> = candles[start..].iter().map(|c| c.close).collect();
    let changes = math::pct_changes(&closes);

    let mut patterns = Vec::new();

    let (run, direction) = trailing_run(&changes);
    if run >= thresholds.strong_trend_run {
        let (pattern, label) = match direction {
            Bias::Bullish => (PatternId::StrongUptrend, "up"),
            _ => (PatternId::StrongDowntrend, "down"),
        };
        patterns.push(PatternMatch::new(
            pattern,
            direction,
            detected_at,
            format!("{} consecutive {} moves, strong momentum", run, label),
        ));
    }
    if run >= thresholds.exhaustion_run {
        let note = match direction {
            Bias::Bullish => "Extended uptrend, potential exhaustion",
            _ => "Extended downtrend, potential bounce",
        };
        patterns.push(PatternMatch::new(
            PatternId::Exhaustion,
            Bias::Neutral,
            detected_at,
            note,
        ));
    }

    let last = changes[changes.len() - 1];
    let prev = changes[changes.len() - 2];

    let large = thresholds.reversal_move_pct;
    if last.abs() > large && prev.abs() > large && last.signum() != prev.signum() {
        let pattern = if last > 0.0 {
            PatternMatch::new(
                PatternId::BullishReversal,
                Bias::Bullish,
                detected_at,
                format!("{:+.2}% after {:+.2}%, bullish reversal after decline", last, prev),
            )
        } else {
            PatternMatch::new(
                PatternId::BearishReversal,
                Bias::Bearish,
                detected_at,
                format!("{:+.2}% after {:+.2}%, bearish reversal after rise", last, prev),
            )
        };
        patterns.push(pattern.with_price_level(closes[closes.len() - 1]));
    }

    if last.abs() < thresholds.indecision_move_pct && prev.abs() > thresholds.indecision_prior_move_pct {
        patterns.push(PatternMatch::new(
            PatternId::Indecision,
            Bias::Neutral,
            detected_at,
            "Small move after large move, market indecision",
        ));
    }

    patterns
}
