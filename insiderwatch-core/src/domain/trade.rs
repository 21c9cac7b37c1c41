//! TradeRecord — one executed order, normalized at ingestion.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side. Case-insensitivity of the raw `Side` column is resolved
/// once at ingestion; everywhere downstream compares this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The opposite side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

/// A single executed trade. Immutable once ingested; identity is the
/// original row index (`TradeId`), not a field of the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub client: String,
    pub security: String,
    pub side: Side,
    pub price: f64,
    pub quantity: i64,
    pub timestamp: NaiveDateTime,
}

impl TradeRecord {
    /// Calendar date of execution, used by the date-range pre-filter.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
