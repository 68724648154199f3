//! Signalscope
//!
//! Technical indicators, pattern detection and weighted signal aggregation
//! over price/volume series, with multi-timeframe alignment, cross-asset
//! correlation and sentiment regime classification.

pub mod common;
pub mod config;
pub mod context;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod patterns;
pub mod signals;
pub mod validation;

pub use config::{AnalysisOptions, EngineConfig, RegimeBands, Thresholds};
pub use context::{classify_regime, correlate, MarketContext};
pub use error::{EngineError, Result};
pub use models::*;
pub use signals::engine::{analyze, analyze_multi_timeframe, SignalEngine};
pub use signals::weights::WeightTable;
pub use validation::{validate_series, validate_series_with, ValidationConfig};
