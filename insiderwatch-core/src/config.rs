//! Per-run analysis configuration.
//!
//! User-supplied, per-run input is modeled as explicit typed objects
//! rather than ad hoc runtime state: an inclusive date range, a security
//! allow-filter, and the publication sensitivity map.

use crate::domain::Security;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Inclusive `[from, to]` calendar-date range for pre-filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, ConfigError> {
        if from > to {
            return Err(ConfigError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Both endpoints are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Which securities are in scope for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityFilter {
    /// Every security present in the batch.
    All,
    /// Only the listed securities.
    Only(BTreeSet<Security>),
}

impl SecurityFilter {
    pub fn only<I: IntoIterator<Item = Security>>(securities: I) -> Self {
        SecurityFilter::Only(securities.into_iter().collect())
    }

    pub fn includes(&self, security: &str) -> bool {
        match self {
            SecurityFilter::All => true,
            SecurityFilter::Only(set) => set.contains(security),
        }
    }
}

impl Default for SecurityFilter {
    fn default() -> Self {
        SecurityFilter::All
    }
}

/// Declared news sensitivity of a security for the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    #[default]
    None,
    Good,
    Bad,
}

/// Security → sensitivity, supplied once per run. Unmapped securities
/// read as `Sensitivity::None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityMap {
    entries: BTreeMap<Security, Sensitivity>,
}

impl SensitivityMap {
    pub fn new(entries: BTreeMap<Security, Sensitivity>) -> Self {
        Self { entries }
    }

    pub fn get(&self, security: &str) -> Sensitivity {
        self.entries.get(security).copied().unwrap_or_default()
    }
}

impl FromIterator<(Security, Sensitivity)> for SensitivityMap {
    fn from_iter<T: IntoIterator<Item = (Security, Sensitivity)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Everything the engine needs for one run besides the batch and the
/// insider registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub date_range: DateRange,
    pub securities: SecurityFilter,
    pub sensitivity: SensitivityMap,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid date range: from {from} is after to {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
}
