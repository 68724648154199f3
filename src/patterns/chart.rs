//! Chart geometry: double tops/bottoms, consolidation, breakouts and
//! trend channels over the most recent closes.

use crate::common::math;
use crate::config::Thresholds;
use crate::models::indicators::Bias;
use crate::models::pattern::{PatternId, PatternMatch};
use crate::models::series::Candle;

const CONSOLIDATION_TAIL: usize = 5;

/// Indices of strict local maxima and minima.
pub fn turning_points(values: &[f64]) -> (Vec<usize>, Vec<usize>) {
    let mut peaks = Vec::new();
    let mut troughs = Vec::new();
    for i in 1..values.len().saturating_sub(1) {
        if values[i] > values[i - 1] && values[i] > values[i + 1] {
            peaks.push(i);
        }
        if values[i] < values[i - 1] && values[i] < values[i + 1] {
            troughs.push(i);
        }
    }
    (peaks, troughs)
}

fn range(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    max - min
}

/// Last two turning points within `tolerance_pct` of each other.
fn comparable_pair(values: &[f64], indices: &[usize], tolerance_pct: f64) -> Option<(usize, f64, f64)> {
    let [.., first, second] = indices else {
        return None;
    };
    let (a, b) = (values[*first], values[*second]);
    if a <= 0.0 || (b - a).abs() / a * 100.0 >= tolerance_pct {
        return None;
    }
    Some((*second, a, b))
}

pub fn detect_chart_patterns(candles: &[Candle], thresholds: &Thresholds) -> Vec<PatternMatch> {
    let window = thresholds.chart_window;
    if window < 3 || candles.len() < window {
        return Vec::new();
    }
    let offset = candles.len() - window;
    let detected_at = candles.len() - 1;
    let recent: Vec<f64> = candles[offset..].iter().map(|c| c.close).collect();
    let (peaks, troughs) = turning_points(&recent);

    let mut patterns = Vec::new();

    if let Some((index, a, b)) =
        comparable_pair(&recent, &peaks, thresholds.double_extreme_tolerance_pct)
    {
        patterns.push(
            PatternMatch::new(
                PatternId::DoubleTop,
                Bias::Bearish,
                offset + index,
                "Double top, bearish reversal",
            )
            .with_price_level(a.max(b)),
        );
    }
    if let Some((index, a, b)) =
        comparable_pair(&recent, &troughs, thresholds.double_extreme_tolerance_pct)
    {
        patterns.push(
            PatternMatch::new(
                PatternId::DoubleBottom,
                Bias::Bullish,
                offset + index,
                "Double bottom, bullish reversal",
            )
            .with_price_level(a.min(b)),
        );
    }

    if peaks.len() >= 2 && troughs.len() >= 2 {
        let full_range = range(&recent);
        let tail_range = range(&recent[recent.len() - CONSOLIDATION_TAIL.min(recent.len())..]);
        if tail_range < full_range * thresholds.consolidation_ratio {
            patterns.push(PatternMatch::new(
                PatternId::Consolidation,
                Bias::Neutral,
                detected_at,
                "Range compressing, breakout possible",
            ));
        }
    }

    let last = recent[recent.len() - 1];
    let prior = &recent[..recent.len() - 1];
    let prior_high = prior.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let prior_low = prior.iter().copied().fold(f64::INFINITY, f64::min);
    let margin = thresholds.breakout_pct / 100.0;
    if last > prior_high * (1.0 + margin) {
        patterns.push(
            PatternMatch::new(
                PatternId::UpsideBreakout,
                Bias::Bullish,
                detected_at,
                format!("Close broke above the {}-bar high", window - 1),
            )
            .with_price_level(prior_high),
        );
    } else if last < prior_low * (1.0 - margin) {
        patterns.push(
            PatternMatch::new(
                PatternId::DownsideBreakdown,
                Bias::Bearish,
                detected_at,
                format!("Close broke below the {}-bar low", window - 1),
            )
            .with_price_level(prior_low),
        );
    }

    if let Some(channel) = detect_channel(candles, thresholds) {
        patterns.push(channel);
    }

    patterns
}

/// Tight linear channel over the last `channel_window` closes.
pub fn detect_channel(candles: &[Candle], thresholds: &Thresholds) -> Option<PatternMatch> {
    let window = thresholds.channel_window;
    if window < 2 || candles.len() < window {
        return None;
    }
    let closes: Vec<f64> = candles[candles.len() - window..]
        .iter()
        .map(|c| c.close)
        .collect();
    let (slope, intercept) = math::linear_fit(&closes)?;
    let avg = math::mean(&closes)?;
    if avg <= 0.0 {
        return None;
    }
    let deviation = closes
        .iter()
        .enumerate()
        .map(|(i, y)| (y - (slope * i as f64 + intercept)).abs())
        .sum::<f64>()
        / window as f64;
    if deviation / avg * 100.0 >= thresholds.channel_deviation_pct {
        return None;
    }

    let detected_at = candles.len() - 1;
    if slope > 0.0 {
        Some(PatternMatch::new(
            PatternId::RisingChannel,
            Bias::Bullish,
            detected_at,
            "Clean rising channel",
        ))
    } else if slope < 0.0 {
        Some(PatternMatch::new(
            PatternId::FallingChannel,
            Bias::Bearish,
            detected_at,
            "Clean falling channel",
        ))
    } else {
        None
    }
}
