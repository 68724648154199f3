//! Bias and confidence from a weighted tally

use crate::common::math::round1;
use crate::models::indicators::Bias;

/// Sign of `bullish - bearish`; an exact tie is neutral.
pub fn overall_bias(bullish_weight: f64, bearish_weight: f64) -> Bias {
    if bullish_weight > bearish_weight {
        Bias::Bullish
    } else if bearish_weight > bullish_weight {
        Bias::Bearish
    } else {
        Bias::Neutral
    }
}

/// Share of the total weight held by the leading side, as a 0-100 percentage
/// rounded to one decimal.
///
/// Neutral weight counts in the denominator. Once any signal fired the result
/// is never below `floor`, even when every fired weight is zero; with no
/// signals it is 0. A floor outside 0-100 is pulled into range.
pub fn calculate_confidence(
    bullish_weight: f64,
    bearish_weight: f64,
    neutral_weight: f64,
    signals_fired: usize,
    floor: f64,
) -> f64 {
    if signals_fired == 0 {
        return 0.0;
    }
    let floor = if floor.is_nan() { 0.0 } else { floor.clamp(0.0, 100.0) };
    let total = bullish_weight + bearish_weight + neutral_weight;
    if total.is_nan() || total <= 0.0 {
        return floor;
    }
    let leading = bullish_weight.max(bearish_weight);
    round1(leading / total * 100.0).clamp(floor, 100.0)
}
