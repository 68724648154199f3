//! Correlation of percent changes between two assets.

use crate::common::math;
use crate::config::Thresholds;
use crate::models::context::{CorrelationDirection, CorrelationResult, CorrelationStrength};
use crate::models::series::PriceSeries;

/// Closes of both series at their shared timestamps, oldest first.
pub fn align_by_timestamp(target: &PriceSeries, reference: &PriceSeries) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let (a, b) = (target.candles(), reference.candles());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].timestamp.cmp(&b[j].timestamp) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                xs.push(a[i].close);
                ys.push(b[j].close);
                i += 1;
                j += 1;
            }
        }
    }
    (xs, ys)
}

pub fn correlation_strength(coefficient: f64) -> CorrelationStrength {
    let magnitude = coefficient.abs();
    if magnitude >= 0.8 {
        CorrelationStrength::VeryStrong
    } else if magnitude >= 0.6 {
        CorrelationStrength::Strong
    } else if magnitude >= 0.4 {
        CorrelationStrength::Moderate
    } else if magnitude >= 0.2 {
        CorrelationStrength::Weak
    } else {
        CorrelationStrength::Independent
    }
}

fn correlation_note(coefficient: f64) -> String {
    let magnitude = coefficient.abs();
    if magnitude > 0.7 && coefficient > 0.0 {
        format!("Highly correlated ({:.2}), the reference trend dominates", coefficient)
    } else if magnitude > 0.7 {
        format!("Strongly inversely correlated ({:.2})", coefficient)
    } else if magnitude > 0.4 {
        format!("Moderately correlated ({:.2}), some independence", coefficient)
    } else {
        format!("Low correlation ({:.2}), moves independently", coefficient)
    }
}

/// Pearson correlation of percent changes over the last `lookback` shared
/// timestamps.
///
/// Fewer than `correlation_min_points` shared points in the window yields an insufficient result
/// rather than a coefficient. A side with no variance is independent.
pub fn correlate_series(
    target: &PriceSeries,
    reference: &PriceSeries,
    lookback: usize,
    thresholds: &Thresholds,
) -> CorrelationResult {
    let (xs, ys) = align_by_timestamp(target, reference);
    let start = xs.len().saturating_sub(lookback);
    let overlapping_points = xs.len() - start;

    if overlapping_points < thresholds.correlation_min_points {
        return CorrelationResult {
            coefficient: None,
            strength: CorrelationStrength::InsufficientData,
            direction: CorrelationDirection::None,
            overlapping_points,
            note: format!(
                "Insufficient overlapping data: {} points, need {}",
                overlapping_points, thresholds.correlation_min_points
            ),
        };
    }

    let x_changes = math::pct_changes(&xs[start..]);
    let y_changes = math::pct_changes(&ys[start..]);
    let coefficient = math::pearson(&x_changes, &y_changes).unwrap_or(0.0);
    let direction = if coefficient > 0.0 {
        CorrelationDirection::Positive
    } else if coefficient < 0.0 {
        CorrelationDirection::Negative
    } else {
        CorrelationDirection::None
    };

    CorrelationResult {
        coefficient: Some(coefficient),
        strength: correlation_strength(coefficient),
        direction,
        overlapping_points,
        note: correlation_note(coefficient),
    }
}
