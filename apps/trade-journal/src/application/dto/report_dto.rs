//! Report DTOs

use serde::{Deserialize, Serialize};

use super::TradeDto;
use crate::application::use_cases::JournalReport;
use crate::domain::results_reporting::ResultsSummary;

/// DTO for an owner's journal report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalReportDto {
    /// Owner ID.
    pub owner_id: String,
    /// All trades of the owner.
    pub trades: Vec<TradeDto>,
    /// Statistics over closed trades.
    pub summary: ResultsSummary,
}

impl JournalReportDto {
    /// Create from a built report.
    #[must_use]
    pub fn from_report(report: &JournalReport) -> Self {
        Self {
            owner_id: report.owner_id.to_string(),
            trades: report.trades.iter().map(TradeDto::from_trade).collect(),
            summary: report.summary.clone(),
        }
    }
}
