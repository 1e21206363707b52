//! Trade journal domain services.

mod result_calculator;
mod status_transition;

pub use result_calculator::{Calculation, IncompleteInput, ResultCalculator};
pub use status_transition::StatusTransitionHandler;
