//! Surveillance report — category-partitioned and consolidated results.
//!
//! The builder does no filtering of its own: it partitions the classified
//! insider trades the upstream stages produced and attaches the detector
//! output untouched.

use serde::{Deserialize, Serialize};

use crate::domain::TradeId;
use crate::engine::publication::PublicationFlag;
use crate::registry::WatchType;

/// A classified insider trade. The publication flag can only exist here,
/// which keeps "flag without insider role" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsiderTrade {
    pub id: TradeId,
    pub watch_type: WatchType,
    pub publication_flag: Option<PublicationFlag>,
}

/// Aggregated output of one engine run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveillanceReport {
    /// Insider trades by Directors.
    pub directors: Vec<InsiderTrade>,
    /// Insider trades by ≥5% Shareholders.
    pub shareholders: Vec<InsiderTrade>,
    /// Insider trades by Board Members.
    pub board_members: Vec<InsiderTrade>,
    /// Insider trades carrying a publication-sensitivity alert.
    pub publication_alerts: Vec<InsiderTrade>,
    /// Trades participating in an offsetting same-client pair.
    pub frequent_patterns: Vec<TradeId>,
    /// Every insider trade, regardless of flags.
    pub consolidated: Vec<InsiderTrade>,
    /// Number of trades in scope after pre-filtering (metadata).
    pub analyzed: usize,
}

impl SurveillanceReport {
    /// Partition classified insiders into the category tables and attach
    /// the detector output.
    pub fn build(
        insiders: Vec<InsiderTrade>,
        frequent_patterns: Vec<TradeId>,
        analyzed: usize,
    ) -> Self {
        let mut report = Self {
            frequent_patterns,
            analyzed,
            ..Self::default()
        };

        for insider in &insiders {
            if insider.publication_flag.is_some() {
                report.publication_alerts.push(*insider);
            }
            match insider.watch_type {
                WatchType::Director => report.directors.push(*insider),
                WatchType::MajorShareholder => report.shareholders.push(*insider),
                WatchType::BoardMember => report.board_members.push(*insider),
            }
        }
        report.consolidated = insiders;
        report
    }

    /// Total insider trades across all categories.
    pub fn insider_count(&self) -> usize {
        self.consolidated.len()
    }
}
