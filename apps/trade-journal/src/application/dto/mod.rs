//! Data Transfer Objects (DTOs)
//!
//! DTOs are used at the JSON boundary of the journal.

mod report_dto;
mod trade_dto;

pub use report_dto::JournalReportDto;
pub use trade_dto::{RecordTradeDto, TradeDto};
