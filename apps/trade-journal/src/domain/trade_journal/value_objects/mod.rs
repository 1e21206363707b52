//! Trade journal value objects.

mod derived_fields;
mod direction;
mod trade_input;
mod trade_status;

pub use derived_fields::DerivedFields;
pub use direction::Direction;
pub use trade_input::{TradeInput, TradeLevels};
pub use trade_status::TradeStatus;
