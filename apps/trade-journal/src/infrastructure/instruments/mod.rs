//! Instrument metadata adapters.

mod fallback;
mod static_table;

pub use fallback::FallbackInstrumentProvider;
pub use static_table::StaticInstrumentProvider;
