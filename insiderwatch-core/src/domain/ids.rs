//! Identity types for trades and batches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Positional trade identity: the original row index within the ingested
/// batch. Flags produced by the engine refer back to rows through this,
/// so the row numbering of the input file is preserved end to end.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TradeId(pub usize);

impl TradeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deterministic content hash of an ingested batch (BLAKE3 over the
/// canonical JSON serialization). Two runs over byte-identical input
/// carry the same hash, which makes run results comparable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchHash(pub String);

impl fmt::Display for BatchHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
