//! Instrument Bounded Context
//!
//! Read-only instrument metadata consumed by the trade result calculator:
//! pip size, monetary pip value per 1.0 lot, and the multiplier applied to the
//! displayed pip count.

pub mod catalog;
mod instrument;

pub use catalog::fallback_instruments;
pub use instrument::{Instrument, InstrumentCategory};
