//! Serializable run specification.
//!
//! A run spec is the TOML file a compliance analyst edits per run: the
//! date range and security filter, the insider registry, and the declared
//! publication sensitivities. It converts into the core engine's typed
//! configuration objects.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use insiderwatch_core::config::{
    AnalysisConfig, ConfigError, DateRange, SecurityFilter, Sensitivity, SensitivityMap,
};
use insiderwatch_core::registry::InsiderRegistry;

/// Complete specification of one surveillance run.
///
/// ```toml
/// [filters]
/// from_date = "2024-01-01"
/// to_date = "2024-01-31"
/// securities = ["AWSH"]        # optional; omitted = all
///
/// [registry]
/// directors = ["ET87CBECETA00002"]
/// shareholders = ["ET10CBECETA01001"]
/// board = ["ET10CBECETA01000"]
///
/// [publications]
/// AWSH = "good"
/// CBO = "bad"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    pub filters: FilterSpec,
    #[serde(default)]
    pub registry: RegistrySpec,
    #[serde(default)]
    pub publications: BTreeMap<String, Sensitivity>,
}

/// Date range and security scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// First execution date in scope (inclusive).
    pub from_date: NaiveDate,
    /// Last execution date in scope (inclusive).
    pub to_date: NaiveDate,
    /// Securities to include. Omitted or empty means all.
    #[serde(default)]
    pub securities: Option<Vec<String>>,
}

/// Insider account identifiers, one array per role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrySpec {
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub shareholders: Vec<String>,
    #[serde(default)]
    pub board: Vec<String>,
}

impl RunSpec {
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, SpecError> {
        Ok(toml::from_str(content)?)
    }

    pub fn registry(&self) -> InsiderRegistry {
        InsiderRegistry::new(
            self.registry.directors.iter().cloned(),
            self.registry.shareholders.iter().cloned(),
            self.registry.board.iter().cloned(),
        )
    }

    /// Build the engine configuration, validating the date range.
    pub fn analysis_config(&self) -> Result<AnalysisConfig, SpecError> {
        let date_range = DateRange::new(self.filters.from_date, self.filters.to_date)?;
        let securities = match &self.filters.securities {
            Some(list) if !list.is_empty() => SecurityFilter::only(list.iter().cloned()),
            _ => SecurityFilter::All,
        };
        let sensitivity = SensitivityMap::new(self.publications.clone());
        Ok(AnalysisConfig {
            date_range,
            securities,
            sensitivity,
        })
    }
}

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to read run spec {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid run spec TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
