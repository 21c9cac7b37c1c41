//! Ingestion — CSV reading and schema validation for executed-orders files.

pub mod ingest;
pub mod schema;

pub use ingest::{read_trades, IngestError};
pub use schema::{ColumnIndex, SchemaError, REQUIRED_COLUMNS};
