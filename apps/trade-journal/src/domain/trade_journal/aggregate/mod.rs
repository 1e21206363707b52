//! Trade Aggregate
//!
//! The Trade aggregate is the root entity of the journal. Its derived fields
//! are only ever written by the calculator and the status transition rules.

mod trade;

pub use trade::{RecordTradeCommand, Trade, TradeDraft, TradePatch};
