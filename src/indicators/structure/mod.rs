//! Structure indicators: support/resistance

pub mod support_resistance;

pub use support_resistance::*;
