//! Insider registry — static classification of client accounts into roles.
//!
//! The registry is fixed at startup, read-only for the lifetime of a run,
//! and passed into the engine explicitly (no process-wide globals). An
//! account may appear in more than one role set; classification resolves
//! the overlap by fixed check order — Director, then ≥5% Shareholder,
//! then Board Member. That precedence is part of the contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Insider role attached to a classified trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchType {
    Director,
    MajorShareholder,
    BoardMember,
}

impl fmt::Display for WatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchType::Director => write!(f, "Director"),
            WatchType::MajorShareholder => write!(f, "≥5% Shareholder"),
            WatchType::BoardMember => write!(f, "Board Member"),
        }
    }
}

/// Three role sets of client account identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsiderRegistry {
    directors: BTreeSet<String>,
    shareholders: BTreeSet<String>,
    board: BTreeSet<String>,
}

impl InsiderRegistry {
    pub fn new<I, J, K>(directors: I, shareholders: J, board: K) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
        K: IntoIterator<Item = String>,
    {
        Self {
            directors: directors.into_iter().collect(),
            shareholders: shareholders.into_iter().collect(),
            board: board.into_iter().collect(),
        }
    }

    /// Role of a client account, if any. Check order is fixed:
    /// Director, then ≥5% Shareholder, then Board Member.
    pub fn role_of(&self, client: &str) -> Option<WatchType> {
        if self.directors.contains(client) {
            Some(WatchType::Director)
        } else if self.shareholders.contains(client) {
            Some(WatchType::MajorShareholder)
        } else if self.board.contains(client) {
            Some(WatchType::BoardMember)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.directors.is_empty() && self.shareholders.is_empty() && self.board.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directors.len() + self.shareholders.len() + self.board.len()
    }
}
