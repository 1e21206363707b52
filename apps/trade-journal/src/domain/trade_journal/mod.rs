//! Trade Journal Bounded Context
//!
//! Manual trades recorded by a user, with derived results that are always
//! recomputed from the authoritative entry/exit/risk levels.
//!
//! # Key Concepts
//!
//! - **Trade Aggregate**: owns the levels, status and derived fields
//! - **Result Calculator**: pips, profit, risk:reward and display result
//! - **Status Transitions**: per-status recomputation rules (OPEN, CLOSED, LOSS, BREAKEVEN)

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::{RecordTradeCommand, Trade, TradeDraft, TradePatch};
pub use errors::TradeJournalError;
pub use repository::TradeRepository;
pub use services::{Calculation, IncompleteInput, ResultCalculator, StatusTransitionHandler};
pub use value_objects::{DerivedFields, Direction, TradeInput, TradeLevels, TradeStatus};
