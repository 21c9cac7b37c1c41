//! Expected schema for executed-orders files.

use thiserror::Error;

/// Column names required in an executed-orders file. Header names are
/// whitespace-trimmed before matching.
pub const REQUIRED_COLUMNS: [&str; 6] =
    ["Client", "Price", "Quantity", "Side", "Date Time", "Security"];

/// Resolved positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub client: usize,
    pub price: usize,
    pub quantity: usize,
    pub side: usize,
    pub date_time: usize,
    pub security: usize,
}

impl ColumnIndex {
    /// Locate every required column in a header row, or report all the
    /// missing ones at once. A schema failure aborts the whole run; no
    /// partial results are produced.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, SchemaError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.as_ref().trim() == name)
        };

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| find(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns(missing.join(", ")));
        }

        // All six positions exist after the check above.
        Ok(Self {
            client: find("Client").unwrap_or_default(),
            price: find("Price").unwrap_or_default(),
            quantity: find("Quantity").unwrap_or_default(),
            side: find("Side").unwrap_or_default(),
            date_time: find("Date Time").unwrap_or_default(),
            security: find("Security").unwrap_or_default(),
        })
    }
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required columns: {0}")]
    MissingColumns(String),
}
