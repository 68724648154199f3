//! Trend indicators: simple/exponential averages, ADX

pub mod adx;
pub mod ema;
pub mod moving_averages;

pub use adx::*;
pub use ema::*;
pub use moving_averages::*;
