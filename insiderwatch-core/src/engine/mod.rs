//! Surveillance analysis engine — one in-memory batch per invocation.
//!
//! Stages, in order:
//!
//! 1. Pre-filter: restrict the batch to the configured date range and
//!    security set, preserving original row identities
//! 2. Classifier: tag trades executed by registered insiders
//! 3. Publication correlator: alert on insider trades aligned with news
//! 4. Frequent-pattern detector: offsetting same-client pairs
//! 5. Report builder: category partitions + consolidated table
//!
//! Single-threaded and synchronous: a run either completes over the full
//! batch or the caller sees one run-level error from ingestion. Empty
//! result tables are a normal outcome.

pub mod classifier;
pub mod patterns;
pub mod publication;
pub mod report;

pub use classifier::classify;
pub use patterns::{find_frequent_patterns, MATCH_WINDOW_DAYS};
pub use publication::{correlate, PublicationFlag};
pub use report::{InsiderTrade, SurveillanceReport};

use crate::config::AnalysisConfig;
use crate::domain::{TradeBatch, TradeId};
use crate::registry::InsiderRegistry;

/// Row identities of the trades in scope for a run: execution date inside
/// the inclusive range and security passing the filter.
pub fn prefilter(batch: &TradeBatch, config: &AnalysisConfig) -> Vec<TradeId> {
    batch
        .iter()
        .filter(|(_, t)| {
            config.date_range.contains(t.date()) && config.securities.includes(&t.security)
        })
        .map(|(id, _)| id)
        .collect()
}

/// Analyze one batch. Deterministic: the same batch, registry, and
/// configuration always produce an identical report.
pub fn run_analysis(
    batch: &TradeBatch,
    registry: &InsiderRegistry,
    config: &AnalysisConfig,
) -> SurveillanceReport {
    let scope = prefilter(batch, config);

    let mut insiders = Vec::new();
    for &id in &scope {
        let trade = &batch[id];
        if let Some(watch_type) = classifier::classify(trade, registry) {
            // Publication rules apply to insider trades only; other
            // clients are never evaluated against the table.
            let publication_flag = publication::correlate(trade, &config.sensitivity);
            insiders.push(InsiderTrade {
                id,
                watch_type,
                publication_flag,
            });
        }
    }

    let frequent_patterns = patterns::find_frequent_patterns(batch, &scope);
    SurveillanceReport::build(insiders, frequent_patterns, scope.len())
}
