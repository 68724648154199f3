//! Series validation and normalization.
//!
//! Raw candles enter here and leave as an immutable [`PriceSeries`]: finite,
//! non-negative, ascending by timestamp with duplicates collapsed.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::series::{Candle, PriceSeries};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Largest tolerated distance between consecutive timestamps, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gap_seconds: Option<i64>,
}

impl ValidationConfig {
    /// The gap limit must be a positive number of seconds that fits a `Duration`.
    pub fn validate(&self) -> Result<()> {
        match self.max_gap_seconds {
            Some(seconds) if seconds <= 0 || Duration::try_seconds(seconds).is_none() => {
                Err(EngineError::InvalidConfig(format!(
                    "max_gap_seconds must be a positive duration, got {}",
                    seconds
                )))
            }
            _ => Ok(()),
        }
    }

    fn max_gap(&self) -> Option<Duration> {
        self.max_gap_seconds.and_then(Duration::try_seconds)
    }
}

/// Validate with the default configuration (no gap limit).
pub fn validate_series(candles: &[Candle], min_required: usize) -> Result<PriceSeries> {
    validate_series_with(candles, min_required, &ValidationConfig::default())
}

/// Validate `candles` and require at least `min_required` points after
/// de-duplication.
///
/// Equal timestamps keep the last record; a timestamp earlier than its
/// predecessor is malformed.
pub fn validate_series_with(
    candles: &[Candle],
    min_required: usize,
    config: &ValidationConfig,
) -> Result<PriceSeries> {
    config.validate()?;
    let mut normalized: Vec<Candle> = Vec::with_capacity(candles.len());

    for (index, candle) in candles.iter().enumerate() {
        check_fields(index, candle)?;

        match normalized.last_mut() {
            Some(prev) if candle.timestamp == prev.timestamp => {
                *prev = *candle;
                continue;
            }
            Some(prev) if candle.timestamp < prev.timestamp => {
                return Err(EngineError::malformed(
                    index,
                    format!(
                        "timestamp {} precedes {}",
                        candle.timestamp, prev.timestamp
                    ),
                ));
            }
            Some(prev) => {
                if let Some(max_gap) = config.max_gap() {
                    let gap = candle.timestamp - prev.timestamp;
                    if gap > max_gap {
                        return Err(EngineError::malformed(
                            index,
                            format!(
                                "gap of {}s exceeds tolerance of {}s",
                                gap.num_seconds(),
                                max_gap.num_seconds()
                            ),
                        ));
                    }
                }
            }
            None => {}
        }
        normalized.push(*candle);
    }

    if normalized.len() < min_required {
        return Err(EngineError::InsufficientData {
            required: min_required,
            got: normalized.len(),
        });
    }

    Ok(PriceSeries::from_validated(normalized))
}

fn check_fields(index: usize, candle: &Candle) -> Result<()> {
    let fields = [
        ("open", candle.open),
        ("high", Some(candle.high)),
        ("low", Some(candle.low)),
        ("close", Some(candle.close)),
        ("volume", Some(candle.volume)),
    ];
    for (name, value) in fields {
        let Some(value) = value else { continue };
        if !value.is_finite() {
            return Err(EngineError::malformed(index, format!("{} is not a number", name)));
        }
        if value < 0.0 {
            return Err(EngineError::malformed(
                index,
                format!("{} is negative ({})", name, value),
            ));
        }
    }
    if candle.high < candle.low {
        return Err(EngineError::malformed(
            index,
            format!("high {} is below low {}", candle.high, candle.low),
        ));
    }
    Ok(())
}
