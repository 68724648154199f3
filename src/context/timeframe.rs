//! Multi-timeframe analysis and alignment scoring.

use rayon::prelude::*;
use tracing::warn;

use crate::common::math;
use crate::config::Thresholds;
use crate::error::{EngineError, Result};
use crate::models::context::{
    AlignmentAssessment, AlignmentResult, MultiTimeframeReport, SkippedHorizon, TimeframeReport,
    TrendDirection,
};
use crate::models::indicators::Bias;
use crate::models::series::{Candle, PriceSeries};
use crate::signals::engine::SignalEngine;

enum HorizonOutcome {
    Analysed(TimeframeReport),
    Skipped(SkippedHorizon),
}

/// Direction of the least-squares slope over the last `trend_window` closes.
///
/// The trend is strong when the slope per period exceeds
/// `strong_trend_slope_pct` of the latest price.
pub fn trend_direction(closes: &[f64], thresholds: &Thresholds) -> TrendDirection {
    let window = thresholds.trend_window.max(2);
    if closes.len() < window {
        return TrendDirection::Unknown;
    }
    let recent = &closes[closes.len() - window..];
    let (Some(slope), Some(&last)) = (math::linear_slope(recent), recent.last()) else {
        return TrendDirection::Unknown;
    };
    let strong = last * thresholds.strong_trend_slope_pct / 100.0;
    if slope > strong {
        TrendDirection::StrongUp
    } else if slope > 0.0 {
        TrendDirection::Up
    } else if slope < -strong {
        TrendDirection::StrongDown
    } else if slope < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Sideways
    }
}

/// Sample standard deviation of percent returns, already in percent.
pub fn volatility(closes: &[f64]) -> f64 {
    math::sample_std_dev(&math::pct_changes(closes)).unwrap_or(0.0)
}

pub fn price_change_percent(closes: &[f64]) -> f64 {
    match (closes.first(), closes.last()) {
        (Some(first), Some(last)) if *first != 0.0 => (last - first) / first * 100.0,
        _ => 0.0,
    }
}

/// Score agreement of per-horizon biases.
///
/// The majority is the strictly most frequent bias; a tie for the top is
/// mixed and scores 50. Fewer than two horizons is insufficient and scores 0.
pub fn calculate_alignment(biases: &[Bias]) -> AlignmentResult {
    let count = |bias: Bias| biases.iter().filter(|b| **b == bias).count();
    let bullish = count(Bias::Bullish);
    let bearish = count(Bias::Bearish);
    let neutral = count(Bias::Neutral);
    let total = biases.len();

    let (score, assessment) = if total < 2 {
        (0.0, AlignmentAssessment::InsufficientData)
    } else {
        let mut ranked = [
            (bullish, Bias::Bullish),
            (bearish, Bias::Bearish),
            (neutral, Bias::Neutral),
        ];
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        let (top, bias) = ranked[0];
        if top == ranked[1].0 {
            (50.0, AlignmentAssessment::Mixed)
        } else if top == total {
            (100.0, AlignmentAssessment::PerfectAlignment(bias))
        } else {
            (
                math::round1(top as f64 / total as f64 * 100.0),
                AlignmentAssessment::Majority(bias),
            )
        }
    };

    AlignmentResult {
        score,
        assessment,
        bullish_horizons: bullish,
        bearish_horizons: bearish,
        neutral_horizons: neutral,
        total_horizons: total,
    }
}

fn analyze_horizon(
    engine: &SignalEngine,
    series: &PriceSeries,
    horizon: usize,
) -> Result<HorizonOutcome> {
    let Some(window) = series.tail(horizon) else {
        return Ok(HorizonOutcome::Skipped(SkippedHorizon {
            horizon,
            required: horizon.max(engine.min_required_points()),
            available: series.len(),
        }));
    };
    match engine.analyze_series(&window) {
        Ok(signal) => {
            let closes = window.closes();
            let thresholds = &engine.config().thresholds;
            Ok(HorizonOutcome::Analysed(TimeframeReport {
                horizon,
                trend_direction: trend_direction(&closes, thresholds),
                price_change_percent: price_change_percent(&closes),
                volatility: volatility(&closes),
                signal,
            }))
        }
        Err(EngineError::InsufficientData { required, got }) => {
            Ok(HorizonOutcome::Skipped(SkippedHorizon {
                horizon,
                required,
                available: got,
            }))
        }
        Err(e) => Err(e),
    }
}

/// Run the full analysis once per horizon over the most recent `horizon`
/// points, in parallel, and score their agreement.
///
/// Horizons that cannot be analysed are reported as skipped. The call fails
/// only when the series is malformed or no horizon could be analysed.
pub fn analyze_timeframes(
    engine: &SignalEngine,
    candles: &[Candle],
    horizons: &[usize],
) -> Result<MultiTimeframeReport> {
    if horizons.is_empty() {
        return Err(EngineError::InvalidConfig(
            "at least one horizon is required".to_string(),
        ));
    }
    let series = crate::validation::validate_series_with(
        candles,
        0,
        &engine.config().validation,
    )?;

    let outcomes: Vec<Result<HorizonOutcome>> = horizons
        .par_iter()
        .map(|&horizon| analyze_horizon(engine, &series, horizon))
        .collect();

    let mut timeframes = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome? {
            HorizonOutcome::Analysed(report) => timeframes.push(report),
            HorizonOutcome::Skipped(skip) => {
                warn!(
                    horizon = skip.horizon,
                    required = skip.required,
                    available = skip.available,
                    "Skipping horizon: insufficient data"
                );
                skipped.push(skip);
            }
        }
    }

    if timeframes.is_empty() {
        let required = skipped
            .iter()
            .map(|s| s.required)
            .min()
            .unwrap_or_else(|| engine.min_required_points());
        return Err(EngineError::InsufficientData {
            required,
            got: series.len(),
        });
    }

    let biases: Vec<Bias> = timeframes.iter().map(|t| t.signal.overall_bias).collect();
    let alignment = calculate_alignment(&biases);

    Ok(MultiTimeframeReport {
        timeframes,
        skipped,
        alignment,
    })
}
