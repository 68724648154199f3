//! Market context: multi-timeframe alignment, correlation against a
//! reference asset and sentiment regime.

pub mod correlation;
pub mod regime;
pub mod timeframe;

pub use correlation::{align_by_timestamp, correlate_series, correlation_strength};
pub use regime::{classify_regime, classify_regime_with};
pub use timeframe::{calculate_alignment, price_change_percent, trend_direction, volatility};

use crate::config::AnalysisOptions;
use crate::error::Result;
use crate::models::context::{CorrelationResult, MarketContextReport};
use crate::models::series::Candle;
use crate::signals::engine::SignalEngine;

/// Correlate two raw series with default thresholds.
pub fn correlate(target: &[Candle], reference: &[Candle], lookback: usize) -> Result<CorrelationResult> {
    SignalEngine::with_options(AnalysisOptions::default())?.correlate(target, reference, lookback)
}

/// Builder for a combined [`MarketContextReport`].
pub struct MarketContext<'a> {
    engine: &'a SignalEngine,
    candles: &'a [Candle],
    horizons: Vec<usize>,
    reference: Option<(&'a [Candle], usize)>,
    sentiment_index: Option<f64>,
}

impl<'a> MarketContext<'a> {
    pub fn new(engine: &'a SignalEngine, candles: &'a [Candle], horizons: &[usize]) -> Self {
        Self {
            engine,
            candles,
            horizons: horizons.to_vec(),
            reference: None,
            sentiment_index: None,
        }
    }

    /// Add a correlation against `reference` over `lookback` shared points.
    pub fn with_reference(mut self, reference: &'a [Candle], lookback: usize) -> Self {
        self.reference = Some((reference, lookback));
        self
    }

    pub fn with_sentiment(mut self, sentiment_index: f64) -> Self {
        self.sentiment_index = Some(sentiment_index);
        self
    }

    pub fn build(self) -> Result<MarketContextReport> {
        let timeframes = self
            .engine
            .analyze_multi_timeframe(self.candles, &self.horizons)?;
        let correlation = match self.reference {
            Some((reference, lookback)) => {
                Some(self.engine.correlate(self.candles, reference, lookback)?)
            }
            None => None,
        };
        let regime = match self.sentiment_index {
            Some(index) => Some(self.engine.classify_regime(index)?),
            None => None,
        };
        Ok(MarketContextReport {
            timeframes,
            correlation,
            regime,
        })
    }
}
