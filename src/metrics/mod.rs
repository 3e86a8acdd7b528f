//! Synthetic monitoring series for the dashboard charts.
//!
//! Every series covers the trailing twelve hours in half-hour steps. Values
//! are uniform noise laid over a sine wave, drawn from a caller-supplied
//! random source so that a fixed seed reproduces a chart exactly.

mod generator;
mod series;

pub use generator::*;
pub use series::*;
