//! InsiderWatch Core — trade surveillance analysis engine.
//!
//! This crate contains the heart of the compliance-analytics tool:
//! - Domain types (trades, positional identities, batches)
//! - Insider registry with fixed role-check precedence
//! - Per-run analysis configuration (date range, security filter,
//!   publication sensitivity map)
//! - CSV ingestion with schema validation
//! - The engine: classifier, publication correlator, frequent-pattern
//!   detector, and report builder

pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod registry;
