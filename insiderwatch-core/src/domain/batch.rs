//! TradeBatch — the in-memory batch the engine analyzes.

use super::ids::{BatchHash, TradeId};
use super::trade::TradeRecord;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered, immutable collection of trades. Trade identity is
/// positional: `TradeId(i)` names the i-th ingested row, and the batch
/// never reorders or drops rows after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeBatch {
    trades: Vec<TradeRecord>,
}

impl TradeBatch {
    pub fn new(trades: Vec<TradeRecord>) -> Self {
        Self { trades }
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn get(&self, id: TradeId) -> Option<&TradeRecord> {
        self.trades.get(id.0)
    }

    /// Iterate trades with their positional identities.
    pub fn iter(&self) -> impl Iterator<Item = (TradeId, &TradeRecord)> {
        self.trades.iter().enumerate().map(|(i, t)| (TradeId(i), t))
    }

    /// Deterministic content fingerprint (BLAKE3 over canonical JSON).
    pub fn fingerprint(&self) -> BatchHash {
        let json = serde_json::to_string(&self.trades)
            .unwrap_or_default();
        BatchHash(blake3::hash(json.as_bytes()).to_hex().to_string())
    }
}

impl Index<TradeId> for TradeBatch {
    type Output = TradeRecord;

    fn index(&self, id: TradeId) -> &TradeRecord {
        &self.trades[id.0]
    }
}
