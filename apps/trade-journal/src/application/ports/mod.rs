//! Application Ports (Driven)
//!
//! Interfaces the journal uses to reach the outside world. Trade persistence
//! is a domain port, see [`crate::domain::trade_journal::TradeRepository`].

mod clock_port;
mod instrument_provider_port;

pub use clock_port::{ClockPort, FixedClock, SystemClock};
pub use instrument_provider_port::{InstrumentLookupError, InstrumentProviderPort};
