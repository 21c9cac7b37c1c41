//! Surveillance runner — wires ingestion, the engine, and result assembly.
//!
//! Two entry points:
//! - `run_surveillance()`: reads the trades file, then runs. Used by CLI.
//! - `run_from_batch()`: takes an already-ingested batch. Used by tests
//!   and embedding callers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use insiderwatch_core::data::{read_trades, IngestError};
use insiderwatch_core::domain::{Side, TradeBatch, TradeId};
use insiderwatch_core::engine::{run_analysis, InsiderTrade, PublicationFlag};
use insiderwatch_core::registry::WatchType;

use crate::config::{RunSpec, SpecError};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("failed to open trades file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// One row of a result table, resolved back to the original trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Original row index within the ingested file.
    pub row: usize,
    pub client: String,
    pub security: String,
    pub side: Side,
    pub price: f64,
    pub quantity: i64,
    pub timestamp: NaiveDateTime,
    pub watch_type: Option<WatchType>,
    pub publication_flag: Option<PublicationFlag>,
}

/// The five category tables plus the consolidated insider table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTables {
    pub directors: Vec<ReportRow>,
    pub shareholders: Vec<ReportRow>,
    pub board_members: Vec<ReportRow>,
    pub publication_alerts: Vec<ReportRow>,
    pub frequent_patterns: Vec<ReportRow>,
    pub consolidated: Vec<ReportRow>,
}

/// Complete result of one surveillance run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveillanceRun {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// Deterministic content hash of the ingested batch.
    pub batch_hash: String,
    /// Rows ingested from the trades file.
    pub total_trades: usize,
    /// Rows in scope after date/security filtering.
    pub analyzed_trades: usize,
    pub tables: ReportTables,
}

/// Default schema version for serde deserialization of older JSON
/// without the field.
fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Run a full surveillance pass over a trades file.
pub fn run_surveillance(trades_path: &Path, spec: &RunSpec) -> Result<SurveillanceRun, RunError> {
    let file = File::open(trades_path).map_err(|source| RunError::Io {
        path: trades_path.display().to_string(),
        source,
    })?;
    let batch = read_trades(BufReader::new(file))?;
    run_from_batch(&batch, spec)
}

/// Run over an already-ingested batch — no I/O.
pub fn run_from_batch(batch: &TradeBatch, spec: &RunSpec) -> Result<SurveillanceRun, RunError> {
    let registry = spec.registry();
    let config = spec.analysis_config()?;
    let report = run_analysis(batch, &registry, &config);

    let insider_rows = |trades: &[InsiderTrade]| -> Vec<ReportRow> {
        trades.iter().map(|t| resolve_insider(batch, t)).collect()
    };

    let tables = ReportTables {
        directors: insider_rows(&report.directors),
        shareholders: insider_rows(&report.shareholders),
        board_members: insider_rows(&report.board_members),
        publication_alerts: insider_rows(&report.publication_alerts),
        frequent_patterns: report
            .frequent_patterns
            .iter()
            .map(|&id| resolve_plain(batch, id))
            .collect(),
        consolidated: insider_rows(&report.consolidated),
    };

    Ok(SurveillanceRun {
        schema_version: SCHEMA_VERSION,
        from_date: config.date_range.from(),
        to_date: config.date_range.to(),
        batch_hash: batch.fingerprint().to_string(),
        total_trades: batch.len(),
        analyzed_trades: report.analyzed,
        tables,
    })
}

fn resolve_insider(batch: &TradeBatch, insider: &InsiderTrade) -> ReportRow {
    let mut row = resolve_plain(batch, insider.id);
    row.watch_type = Some(insider.watch_type);
    row.publication_flag = insider.publication_flag;
    row
}

fn resolve_plain(batch: &TradeBatch, id: TradeId) -> ReportRow {
    let trade = &batch[id];
    ReportRow {
        row: id.index(),
        client: trade.client.clone(),
        security: trade.security.clone(),
        side: trade.side,
        price: trade.price,
        quantity: trade.quantity,
        timestamp: trade.timestamp,
        watch_type: None,
        publication_flag: None,
    }
}
