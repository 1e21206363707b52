//! Infrastructure Layer
//!
//! Adapters for the ports defined in the domain and application layers:
//!
//! - `instruments/`: Instrument metadata providers (static table, fallback chain)
//! - `persistence/`: Trade repository adapters (in-memory)

pub mod instruments;
pub mod persistence;
