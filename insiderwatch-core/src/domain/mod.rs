//! Domain types for InsiderWatch.

pub mod batch;
pub mod ids;
pub mod trade;

pub use batch::TradeBatch;
pub use ids::{BatchHash, TradeId};
pub use trade::{Side, TradeRecord};

/// Security symbol type alias
pub type Security = String;
