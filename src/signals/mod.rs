//! Signal evaluation and aggregation.

pub mod aggregation;
pub mod engine;
pub mod evaluation;
pub mod scoring;
pub mod weights;

pub use aggregation::*;
pub use engine::*;
pub use evaluation::*;
pub use scoring::*;
pub use weights::*;
