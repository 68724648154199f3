//! Pattern detectors. Matches are independent of one another; every
//! occurrence is reported once.

pub mod chart;
pub mod price_action;

pub use chart::{detect_channel, detect_chart_patterns, turning_points};
pub use price_action::{detect_price_patterns, trailing_run};

use crate::config::Thresholds;
use crate::models::pattern::PatternMatch;
use crate::models::series::Candle;

/// Price-action matches followed by chart matches.
pub fn detect_patterns(candles: &[Candle], thresholds: &Thresholds) -> Vec<PatternMatch> {
    let mut patterns = detect_price_patterns(candles, thresholds);
    patterns.extend(detect_chart_patterns(candles, thresholds));
    patterns
}
