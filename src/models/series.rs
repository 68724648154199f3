//! Price/volume series models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV record. `open` is optional because several feeds only report
/// closing prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub open: Option<f64>,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open: Some(open),
            high,
            low,
            close,
            volume,
        }
    }

    /// Close-only record: high and low collapse onto the price.
    pub fn from_price(price: f64, volume: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            open: None,
            high: price,
            low: price,
            close: price,
            volume,
        }
    }
}

/// A validated, ascending, de-duplicated series.
///
/// Only [`crate::validation`] constructs it, so every instance upholds the
/// ordering and non-negativity invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    candles: Vec<Candle>,
}

impl PriceSeries {
    pub(crate) fn from_validated(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.volume).collect()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// The most recent `n` points, or `None` when fewer are available.
    pub fn tail(&self, n: usize) -> Option<PriceSeries> {
        if n == 0 || n > self.candles.len() {
            return None;
        }
        Some(Self {
            candles: self.candles[self.candles.len() - n..].to_vec(),
        })
    }
}
