//! CSV ingestion for executed-orders files.
//!
//! Ingestion is all-or-nothing: the first row that fails type coercion
//! fails the whole run. There is no per-row skip; callers re-ingest with
//! corrected input. A header-only file yields an empty batch, which is a
//! normal outcome.

use std::io;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::data::schema::{ColumnIndex, SchemaError};
use crate::domain::{Side, TradeBatch, TradeRecord};

/// Timestamp formats accepted in the `Date Time` column, tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: cannot parse {column} value '{value}'")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Read a full trade batch from CSV. Row identity follows file order:
/// the first data row becomes `TradeId(0)`.
pub fn read_trades<R: io::Read>(reader: R) -> Result<TradeBatch, IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let header_fields: Vec<&str> = headers.iter().collect();
    let idx = ColumnIndex::resolve(&header_fields)?;

    let mut trades = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1; // 1-based data row for error messages

        let field = |col: usize, name: &'static str| -> Result<&str, IngestError> {
            record.get(col).map(str::trim).ok_or(IngestError::Parse {
                row,
                column: name,
                value: String::new(),
            })
        };

        let client = field(idx.client, "Client")?.to_string();
        let security = field(idx.security, "Security")?.to_string();
        let side = parse_side(field(idx.side, "Side")?, row)?;
        let price = parse_price(field(idx.price, "Price")?, row)?;
        let quantity = parse_quantity(field(idx.quantity, "Quantity")?, row)?;
        let timestamp = parse_timestamp(field(idx.date_time, "Date Time")?, row)?;

        trades.push(TradeRecord {
            client,
            security,
            side,
            price,
            quantity,
            timestamp,
        });
    }

    Ok(TradeBatch::new(trades))
}

/// Side values match case-insensitively; anything that is not buy/sell
/// is a run-level failure, not a skipped row.
fn parse_side(raw: &str, row: usize) -> Result<Side, IngestError> {
    match raw.to_ascii_lowercase().as_str() {
        "buy" => Ok(Side::Buy),
        "sell" => Ok(Side::Sell),
        _ => Err(IngestError::Parse {
            row,
            column: "Side",
            value: raw.to_string(),
        }),
    }
}

fn parse_price(raw: &str, row: usize) -> Result<f64, IngestError> {
    raw.parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or(IngestError::Parse {
            row,
            column: "Price",
            value: raw.to_string(),
        })
}

fn parse_quantity(raw: &str, row: usize) -> Result<i64, IngestError> {
    raw.parse::<i64>().map_err(|_| IngestError::Parse {
        row,
        column: "Quantity",
        value: raw.to_string(),
    })
}

fn parse_timestamp(raw: &str, row: usize) -> Result<NaiveDateTime, IngestError> {
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(ts);
        }
    }
    // Date-only values land at midnight.
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(ts) = date.and_hms_opt(0, 0, 0) {
            return Ok(ts);
        }
    }
    Err(IngestError::Parse {
        row,
        column: "Date Time",
        value: raw.to_string(),
    })
}
