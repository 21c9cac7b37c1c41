//! Insider classification.

use crate::domain::TradeRecord;
use crate::registry::{InsiderRegistry, WatchType};

/// Tag a trade with the insider role of its client, if any.
///
/// Total and deterministic: unknown clients get `None` and drop out of
/// all insider-specific downstream analysis. Precedence for accounts in
/// more than one role set is the registry's fixed check order.
pub fn classify(trade: &TradeRecord, registry: &InsiderRegistry) -> Option<WatchType> {
    registry.role_of(&trade.client)
}
