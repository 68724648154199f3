//! Main signal engine: validation, indicators, patterns and aggregation for
//! one series.

use tracing::debug;

use crate::config::{AnalysisOptions, EngineConfig};
use crate::context::{correlation, regime, timeframe};
use crate::error::{EngineError, Result};
use crate::indicators::registry::IndicatorRegistry;
use crate::models::context::{CorrelationResult, MultiTimeframeReport, RegimeResult};
use crate::models::series::{Candle, PriceSeries};
use crate::models::signal::SignalReport;
use crate::patterns::detect_patterns;
use crate::signals::aggregation::Aggregator;
use crate::signals::evaluation::{collect_signals, market_state};
use crate::validation::validate_series_with;

/// Stateless analysis engine. Holds only immutable configuration, so one
/// instance can serve any number of concurrent calls.
pub struct SignalEngine {
    config: EngineConfig,
    registry: IndicatorRegistry,
}

impl SignalEngine {
    /// Build an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let registry = IndicatorRegistry::from_options(&config.options);
        Ok(Self { config, registry })
    }

    pub fn with_options(options: AnalysisOptions) -> Result<Self> {
        Self::new(EngineConfig::with_options(options))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Minimum number of points a series needs before it can be analysed.
    pub fn min_required_points(&self) -> usize {
        self.config.options.min_required_points()
    }

    /// Validate raw candles into a series long enough for the configured windows.
    pub fn validate(&self, candles: &[Candle]) -> Result<PriceSeries> {
        validate_series_with(candles, self.min_required_points(), &self.config.validation)
    }

    /// Validate and analyse a raw series.
    pub fn analyze(&self, candles: &[Candle]) -> Result<SignalReport> {
        let series = self.validate(candles)?;
        self.analyze_series(&series)
    }

    /// Analyse an already validated series.
    pub fn analyze_series(&self, series: &PriceSeries) -> Result<SignalReport> {
        let required = self.min_required_points();
        let last = match series.last() {
            Some(last) if series.len() >= required => *last,
            _ => {
                return Err(EngineError::InsufficientData {
                    required,
                    got: series.len(),
                })
            }
        };

        let candles = series.candles();
        let thresholds = &self.config.thresholds;

        let indicators = self.registry.evaluate_all(candles, thresholds);
        let patterns = detect_patterns(candles, thresholds);
        let state = market_state(&indicators);
        let signals = collect_signals(&indicators, &patterns);
        let tally = Aggregator::new(&self.config.weights, thresholds).aggregate(&signals, state);

        debug!(
            points = candles.len(),
            as_of = %last.timestamp,
            bias = ?tally.overall_bias,
            confidence = tally.confidence_percent,
            market_state = ?state,
            signals = signals.len(),
            "Analysis complete"
        );

        Ok(SignalReport {
            as_of: last.timestamp,
            price: last.close,
            points: candles.len(),
            indicators,
            patterns,
            contributions: tally.contributions,
            market_state: state,
            overall_bias: tally.overall_bias,
            confidence_percent: tally.confidence_percent,
            bullish_count: tally.bullish_count,
            bearish_count: tally.bearish_count,
            neutral_count: tally.neutral_count,
            bullish_weight: tally.bullish_weight,
            bearish_weight: tally.bearish_weight,
            neutral_weight: tally.neutral_weight,
        })
    }

    /// Analyse the most recent `horizon` points for every requested horizon.
    pub fn analyze_multi_timeframe(
        &self,
        candles: &[Candle],
        horizons: &[usize],
    ) -> Result<MultiTimeframeReport> {
        timeframe::analyze_timeframes(self, candles, horizons)
    }

    /// Correlate percent changes of `target` against `reference` over the
    /// last `lookback` shared timestamps.
    pub fn correlate(
        &self,
        target: &[Candle],
        reference: &[Candle],
        lookback: usize,
    ) -> Result<CorrelationResult> {
        let target = validate_series_with(target, 0, &self.config.validation)?;
        let reference = validate_series_with(reference, 0, &self.config.validation)?;
        Ok(correlation::correlate_series(
            &target,
            &reference,
            lookback,
            &self.config.thresholds,
        ))
    }

    pub fn classify_regime(&self, sentiment_index: f64) -> Result<RegimeResult> {
        regime::classify_regime_with(sentiment_index, &self.config.regime)
    }
}

/// Analyse `candles` with the given options and default thresholds.
pub fn analyze(candles: &[Candle], options: &AnalysisOptions) -> Result<SignalReport> {
    SignalEngine::with_options(options.clone())?.analyze(candles)
}

/// Multi-timeframe analysis with the given options and default thresholds.
pub fn analyze_multi_timeframe(
    candles: &[Candle],
    horizons: &[usize],
    options: &AnalysisOptions,
) -> Result<MultiTimeframeReport> {
    SignalEngine::with_options(options.clone())?.analyze_multi_timeframe(candles, horizons)
}
