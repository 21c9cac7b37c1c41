//! Frequent-trading pattern detection.
//!
//! Surfaces potential wash-trade patterns: the same client executing two
//! trades with identical price and quantity on opposite sides within a
//! short time window. Neither classification nor publication rules would
//! catch these in isolation.
//!
//! The scan is an explicit sorted-partition pass with a break condition,
//! quadratic per client partition. Per-client trade counts are expected
//! to be small, and partitions are independent and read-only, so the
//! per-partition loop is also the natural grain for parallelism if batch
//! sizes ever demand it.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{TradeBatch, TradeId};

/// Two trades pair up only when their timestamps are at most this many
/// whole days apart.
pub const MATCH_WINDOW_DAYS: i64 = 3;

/// Find all trades participating in at least one offsetting pair.
///
/// `scope` is the pre-filtered batch (insiders and non-insiders alike).
/// Membership is symmetric: when trade A pairs with B, both are flagged,
/// and a trade pairing with several partners still appears exactly once.
/// Output is sorted by (client, timestamp, row) ascending; no matches is
/// an empty vector, not an error.
pub fn find_frequent_patterns(batch: &TradeBatch, scope: &[TradeId]) -> Vec<TradeId> {
    let mut partitions: BTreeMap<&str, Vec<TradeId>> = BTreeMap::new();
    for &id in scope {
        partitions
            .entry(batch[id].client.as_str())
            .or_default()
            .push(id);
    }

    let mut matched: BTreeSet<TradeId> = BTreeSet::new();
    for ids in partitions.values_mut() {
        // Row index breaks timestamp ties so the scan order is stable.
        ids.sort_by_key(|&id| (batch[id].timestamp, id));

        for i in 0..ids.len() {
            let first = &batch[ids[i]];
            for &jd in &ids[i + 1..] {
                let second = &batch[jd];
                // Elapsed time truncated to whole days: 71 hours reads
                // as 2 days. Ascending sort keeps this non-negative.
                let day_diff = (second.timestamp - first.timestamp).num_days();
                if day_diff > MATCH_WINDOW_DAYS {
                    // Time-sorted partition: every later trade is at
                    // least as far away.
                    break;
                }
                if first.price == second.price
                    && first.quantity == second.quantity
                    && first.side != second.side
                {
                    matched.insert(ids[i]);
                    matched.insert(jd);
                }
            }
        }
    }

    let mut out: Vec<TradeId> = matched.into_iter().collect();
    out.sort_by(|&a, &b| {
        let (ta, tb) = (&batch[a], &batch[b]);
        (ta.client.as_str(), ta.timestamp, a).cmp(&(tb.client.as_str(), tb.timestamp, b))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Side, TradeRecord};
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn trade(client: &str, side: Side, price: f64, quantity: i64, when: &str) -> TradeRecord {
        TradeRecord {
            client: client.into(),
            security: "AWSH".into(),
            side,
            price,
            quantity,
            timestamp: ts(when),
        }
    }

    fn run(trades: Vec<TradeRecord>) -> Vec<TradeId> {
        let batch = TradeBatch::new(trades);
        let scope: Vec<TradeId> = batch.iter().map(|(id, _)| id).collect();
        find_frequent_patterns(&batch, &scope)
    }

    #[test]
    fn offsetting_pair_within_window_flags_both() {
        let matched = run(vec![
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("C1", Side::Sell, 10.0, 100, "2024-01-04 09:00:00"),
        ]);
        assert_eq!(matched, vec![TradeId(0), TradeId(1)]);
    }

    #[test]
    fn pair_four_days_apart_is_out_of_window() {
        let matched = run(vec![
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("C1", Side::Sell, 10.0, 100, "2024-01-05 09:00:00"),
        ]);
        assert!(matched.is_empty());
    }

    #[test]
    fn seventy_one_hours_reads_as_two_days() {
        // 2024-01-01 09:00 + 71h = 2024-01-04 08:00. Truncation keeps it
        // well inside the window even though it spans four calendar dates.
        let matched = run(vec![
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("C1", Side::Sell, 10.0, 100, "2024-01-04 08:00:00"),
        ]);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn just_over_three_whole_days_is_excluded() {
        let matched = run(vec![
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("C1", Side::Sell, 10.0, 100, "2024-01-05 09:00:01"),
        ]);
        assert!(matched.is_empty());
    }

    #[test]
    fn identical_timestamps_are_compared() {
        let matched = run(vec![
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("C1", Side::Sell, 10.0, 100, "2024-01-01 09:00:00"),
        ]);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn price_mismatch_is_not_a_pair() {
        let matched = run(vec![
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("C1", Side::Sell, 10.5, 100, "2024-01-01 10:00:00"),
        ]);
        assert!(matched.is_empty());
    }

    #[test]
    fn quantity_mismatch_is_not_a_pair() {
        let matched = run(vec![
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("C1", Side::Sell, 10.0, 101, "2024-01-01 10:00:00"),
        ]);
        assert!(matched.is_empty());
    }

    #[test]
    fn same_side_is_not_a_pair() {
        let matched = run(vec![
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 10:00:00"),
        ]);
        assert!(matched.is_empty());
    }

    #[test]
    fn different_clients_never_pair() {
        let matched = run(vec![
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("C2", Side::Sell, 10.0, 100, "2024-01-01 09:30:00"),
        ]);
        assert!(matched.is_empty());
    }

    #[test]
    fn single_trade_client_contributes_nothing() {
        let matched = run(vec![trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00")]);
        assert!(matched.is_empty());
    }

    #[test]
    fn trade_with_multiple_partners_appears_once() {
        let matched = run(vec![
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("C1", Side::Sell, 10.0, 100, "2024-01-02 09:00:00"),
            trade("C1", Side::Sell, 10.0, 100, "2024-01-03 09:00:00"),
        ]);
        // The buy pairs with both sells; all three rows, each once.
        assert_eq!(matched, vec![TradeId(0), TradeId(1), TradeId(2)]);
    }

    #[test]
    fn early_exit_does_not_hide_later_pairs_for_other_anchors() {
        // The first trade is out of range of the last two, but the last
        // two still pair with each other.
        let matched = run(vec![
            trade("C1", Side::Buy, 9.0, 50, "2024-01-01 09:00:00"),
            trade("C1", Side::Buy, 10.0, 100, "2024-01-10 09:00:00"),
            trade("C1", Side::Sell, 10.0, 100, "2024-01-11 09:00:00"),
        ]);
        assert_eq!(matched, vec![TradeId(1), TradeId(2)]);
    }

    #[test]
    fn output_sorted_by_client_then_time() {
        let matched = run(vec![
            trade("ZED", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
            trade("ZED", Side::Sell, 10.0, 100, "2024-01-02 09:00:00"),
            trade("ANN", Side::Buy, 5.0, 10, "2024-01-03 09:00:00"),
            trade("ANN", Side::Sell, 5.0, 10, "2024-01-03 11:00:00"),
        ]);
        assert_eq!(
            matched,
            vec![TradeId(2), TradeId(3), TradeId(0), TradeId(1)]
        );
    }

    #[test]
    fn unsorted_input_rows_are_handled() {
        // Rows arrive newest-first; partition sorting restores scan order.
        let matched = run(vec![
            trade("C1", Side::Sell, 10.0, 100, "2024-01-03 09:00:00"),
            trade("C1", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
        ]);
        assert_eq!(matched, vec![TradeId(1), TradeId(0)]);
    }
}
