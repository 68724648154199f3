//! Sentiment regime lookup.

use crate::config::RegimeBands;
use crate::error::{EngineError, Result};
use crate::models::context::{PositionSizing, RegimeResult, RegimeZone};

/// Classify with the default 20/40/60/80 bands.
pub fn classify_regime(sentiment_index: f64) -> Result<RegimeResult> {
    classify_regime_with(sentiment_index, &RegimeBands::default())
}

/// Each band's upper edge is exclusive. Input outside [0, 100] is rejected.
pub fn classify_regime_with(sentiment_index: f64, bands: &RegimeBands) -> Result<RegimeResult> {
    if !(0.0..=100.0).contains(&sentiment_index) {
        return Err(EngineError::InvalidRegimeInput(sentiment_index));
    }

    let (zone, sentiment, position_sizing, strategy_note) = if sentiment_index < bands.extreme_fear {
        (
            RegimeZone::ExtremeFear,
            "Extreme Fear",
            PositionSizing::Increase,
            "Contrarian buy zone: accumulate quality assets",
        )
    } else if sentiment_index < bands.fear {
        (
            RegimeZone::Fear,
            "Fear",
            PositionSizing::NormalToIncrease,
            "Buy zone: buy dips, average in",
        )
    } else if sentiment_index < bands.neutral {
        (
            RegimeZone::Neutral,
            "Neutral",
            PositionSizing::Normal,
            "Balanced market: follow technical signals",
        )
    } else if sentiment_index < bands.greed {
        (
            RegimeZone::Greed,
            "Greed",
            PositionSizing::Reduce,
            "Caution zone: scale out of positions",
        )
    } else {
        (
            RegimeZone::ExtremeGreed,
            "Extreme Greed",
            PositionSizing::Minimize,
            "Sell zone: take profits, wait for a pullback",
        )
    };

    Ok(RegimeResult {
        index: sentiment_index,
        zone,
        sentiment: sentiment.to_string(),
        position_sizing,
        strategy_note: strategy_note.to_string(),
    })
}
