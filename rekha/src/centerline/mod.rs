//! Centerline construction.
//!
//! - [`CenterlineGenerator`]: midpoint line between a left/right boundary pair
//! - [`CenterlineAdjuster`]: recenter existing centerlines against the
//!   boundaries around them
//!
//! The two are independent; nothing requires adjusting a generated line.

mod adjuster;
mod generator;

pub use adjuster::CenterlineAdjuster;
pub use generator::CenterlineGenerator;
