//! Volume indicators: OBV, volume regime

pub mod obv;
pub mod volume_regime;

pub use obv::*;
pub use volume_regime::*;
