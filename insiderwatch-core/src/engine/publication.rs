//! Publication-sensitivity correlation.
//!
//! Flags insider trades whose direction lines up with declared news
//! sensitivity of the security. This rule applies only to classified
//! insider trades; the engine never evaluates it for other clients, so a
//! non-insider can never carry a flag even when its trade happens to
//! match the table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{Sensitivity, SensitivityMap};
use crate::domain::{Side, TradeRecord};

/// Alert raised when an insider trades in the direction of the news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationFlag {
    GoodNewsBuy,
    BadNewsSell,
}

impl fmt::Display for PublicationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicationFlag::GoodNewsBuy => write!(f, "Good News Buy Alert"),
            PublicationFlag::BadNewsSell => write!(f, "Bad News Sell Alert"),
        }
    }
}

/// Rule table:
///
/// | Sensitivity | Side | Flag              |
/// |-------------|------|-------------------|
/// | Good        | Buy  | GoodNewsBuy       |
/// | Bad         | Sell | BadNewsSell       |
/// | anything else      | none              |
pub fn correlate(trade: &TradeRecord, sensitivity: &SensitivityMap) -> Option<PublicationFlag> {
    match (sensitivity.get(&trade.security), trade.side) {
        (Sensitivity::Good, Side::Buy) => Some(PublicationFlag::GoodNewsBuy),
        (Sensitivity::Bad, Side::Sell) => Some(PublicationFlag::BadNewsSell),
        _ => None,
    }
}
