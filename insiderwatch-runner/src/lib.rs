//! InsiderWatch Runner — run orchestration and report export.
//!
//! This crate builds on `insiderwatch-core` to provide:
//! - The TOML run specification (filters, registry, publications)
//! - The surveillance runner producing a serializable, versioned result
//! - Export to JSON, per-table CSV, and a Markdown summary

pub mod config;
pub mod export;
pub mod runner;

pub use config::{FilterSpec, RegistrySpec, RunSpec, SpecError};
pub use export::{
    export_json, export_table_csv, generate_summary, import_json, load_artifacts, save_artifacts,
};
pub use runner::{
    run_from_batch, run_surveillance, ReportRow, ReportTables, RunError, SurveillanceRun,
    SCHEMA_VERSION,
};
