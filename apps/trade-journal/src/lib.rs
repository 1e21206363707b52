// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::or_fun_call
    )
)]

//! Trade Journal - Rust Core Library
//!
//! Trade result calculation and results reporting for the signals dashboard.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `instrument`: Pip size, pip value and display multiplier per symbol
//!   - `trade_journal`: Trade aggregate, result calculator, status transitions
//!   - `results_reporting`: Drawdown, streaks, best/worst day, durations
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`InstrumentProviderPort`, `ClockPort`)
//!   - `use_cases`: `RecordTrade`, `UpdateTradePrices`, `ChangeTradeStatus`,
//!     `DeleteTrade`, `JournalReport`
//!   - `dto`: Data transfer objects for the JSON boundary
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `instruments`: Static instrument table and fallback chain
//!   - `persistence`: Trade repository (in-memory)
//!
//! Configuration (`config`) and tracing setup (`telemetry`) sit beside the
//! layers and are used by the binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// YAML configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::instrument::{Instrument, InstrumentCategory};
pub use domain::results_reporting::{
    AggregateStatistics, ClosedPosition, ReportOptions, ResultSource, ResultsSummary,
};
pub use domain::shared::{Money, OwnerId, Symbol, Timestamp, TradeId};
pub use domain::trade_journal::{
    Calculation, DerivedFields, Direction, RecordTradeCommand, ResultCalculator,
    StatusTransitionHandler, Trade, TradeInput, TradeJournalError, TradeLevels, TradeStatus,
};

// Application re-exports
pub use application::dto::{JournalReportDto, RecordTradeDto, TradeDto};
pub use application::ports::{ClockPort, InstrumentProviderPort, SystemClock};
pub use application::use_cases::{
    ChangeTradeStatusUseCase, DeleteTradeUseCase, JournalReportUseCase, RecordTradeUseCase,
    UpdateTradePricesUseCase,
};

// Infrastructure re-exports
pub use infrastructure::instruments::{FallbackInstrumentProvider, StaticInstrumentProvider};
pub use infrastructure::persistence::InMemoryTradeRepository;
