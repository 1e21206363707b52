//! Trade Journal Binary
//!
//! Records a batch of trades and prints a results report per owner.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin trade-journal -- demos/trades.json
//! ```
//!
//! The input file is a JSON array of `RecordTradeDto` objects. Reports are
//! written to stdout as a JSON array of `JournalReportDto`; logs go to stderr.
//!
//! # Environment Variables
//!
//! - `JOURNAL_CONFIG`: Path to the YAML config (default: `config.yaml` when present)
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::{Local, TimeZone};
use trade_journal::application::dto::{JournalReportDto, RecordTradeDto};
use trade_journal::application::ports::SystemClock;
use trade_journal::application::use_cases::{JournalReportUseCase, RecordTradeUseCase};
use trade_journal::config::{Config, load_config};
use trade_journal::infrastructure::instruments::{
    FallbackInstrumentProvider, StaticInstrumentProvider,
};
use trade_journal::infrastructure::persistence::InMemoryTradeRepository;
use trade_journal::telemetry::init_tracing;

/// Default config file, used only when it exists.
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

type ConcreteInstrumentProvider = FallbackInstrumentProvider<StaticInstrumentProvider>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = read_config()?;
    init_tracing(&config.observability.logging)
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    let Some(trades_path) = std::env::args().nth(1) else {
        bail!("usage: trade-journal <trades.json>");
    };

    tracing::info!(
        path = %trades_path,
        overrides = config.instruments.len(),
        source = ?config.reporting.source,
        "Starting trade journal"
    );

    let repo = Arc::new(InMemoryTradeRepository::new());
    let instruments: Arc<ConcreteInstrumentProvider> = Arc::new(FallbackInstrumentProvider::new(
        StaticInstrumentProvider::new(config.instrument_overrides()),
        StaticInstrumentProvider::with_fallback_table(),
    ));

    record_trades(&trades_path, &repo, &instruments).await?;

    let reports = match config.reporting.fixed_offset() {
        Some(offset) => build_reports(&repo, &config, &offset).await?,
        None => build_reports(&repo, &config, &Local).await?,
    };

    let json = serde_json::to_string_pretty(&reports).context("failed to serialize reports")?;
    println!("{json}");
    Ok(())
}

fn read_config() -> anyhow::Result<Config> {
    match std::env::var("JOURNAL_CONFIG") {
        Ok(path) => load_config(Some(&path)).with_context(|| format!("loading {path}")),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(None).context("loading config.yaml")
        }
        Err(_) => Ok(Config::default()),
    }
}

/// Record every trade in the file. Rejected rows are logged and skipped.
async fn record_trades(
    path: &str,
    repo: &Arc<InMemoryTradeRepository>,
    instruments: &Arc<ConcreteInstrumentProvider>,
) -> anyhow::Result<()> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    let rows: Vec<RecordTradeDto> =
        serde_json::from_str(&contents).with_context(|| format!("failed to parse {path}"))?;

    let use_case = RecordTradeUseCase::new(
        Arc::clone(repo),
        Arc::clone(instruments),
        Arc::new(SystemClock),
    );

    let mut rejected = 0_usize;
    for (index, row) in rows.iter().enumerate() {
        if let Err(e) = use_case.execute(row.to_command()).await {
            rejected += 1;
            tracing::warn!(row = index, symbol = %row.symbol, error = %e, "Trade rejected");
        }
    }

    tracing::info!(recorded = rows.len() - rejected, rejected, "Trades loaded");
    Ok(())
}

async fn build_reports<Tz: TimeZone>(
    repo: &Arc<InMemoryTradeRepository>,
    config: &Config,
    tz: &Tz,
) -> anyhow::Result<Vec<JournalReportDto>> {
    let use_case = JournalReportUseCase::new(Arc::clone(repo), config.reporting.report_options());

    let mut reports = Vec::new();
    for owner in repo.owners() {
        let report = use_case
            .execute(&owner, tz)
            .await
            .with_context(|| format!("failed to build report for {owner}"))?;
        reports.push(JournalReportDto::from_report(&report));
    }
    Ok(reports)
}
