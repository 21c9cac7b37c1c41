//! End-to-end engine tests over full batches: classification precedence,
//! publication scope, pattern-window boundaries, and idempotence.

use chrono::{NaiveDate, NaiveDateTime};
use insiderwatch_core::config::{
    AnalysisConfig, DateRange, SecurityFilter, Sensitivity, SensitivityMap,
};
use insiderwatch_core::domain::{Side, TradeBatch, TradeId, TradeRecord};
use insiderwatch_core::engine::{run_analysis, PublicationFlag};
use insiderwatch_core::registry::{InsiderRegistry, WatchType};

// ─── Test helpers ────────────────────────────────────────────────────

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn trade(client: &str, security: &str, side: Side, price: f64, qty: i64, when: &str) -> TradeRecord {
    TradeRecord {
        client: client.into(),
        security: security.into(),
        side,
        price,
        quantity: qty,
        timestamp: ts(when),
    }
}

fn registry() -> InsiderRegistry {
    InsiderRegistry::new(
        vec!["Director1".to_string()],
        vec!["Holder1".to_string()],
        vec!["Board1".to_string()],
    )
}

fn config_for_january() -> AnalysisConfig {
    AnalysisConfig {
        date_range: DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap(),
        securities: SecurityFilter::All,
        sensitivity: SensitivityMap::default(),
    }
}

fn with_sensitivity(security: &str, sensitivity: Sensitivity) -> AnalysisConfig {
    AnalysisConfig {
        sensitivity: [(security.to_string(), sensitivity)].into_iter().collect(),
        ..config_for_january()
    }
}

// ─── Scenario A: offsetting pair at the window boundary ──────────────

#[test]
fn scenario_a_day_three_pair_flags_both_rows() {
    let batch = TradeBatch::new(vec![
        trade("C1", "X", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
        trade("C1", "X", Side::Sell, 10.0, 100, "2024-01-04 09:00:00"),
    ]);
    let report = run_analysis(&batch, &registry(), &config_for_january());
    assert_eq!(report.frequent_patterns, vec![TradeId(0), TradeId(1)]);
}

#[test]
fn scenario_a_day_four_pair_flags_neither_row() {
    let batch = TradeBatch::new(vec![
        trade("C1", "X", Side::Buy, 10.0, 100, "2024-01-01 09:00:00"),
        trade("C1", "X", Side::Sell, 10.0, 100, "2024-01-05 09:00:00"),
    ]);
    let report = run_analysis(&batch, &registry(), &config_for_january());
    assert!(report.frequent_patterns.is_empty());
}

// ─── Scenario B: publication-sensitive insider trades ────────────────

#[test]
fn scenario_b_insider_buy_on_good_news_is_alerted() {
    let batch = TradeBatch::new(vec![trade(
        "Director1", "X", Side::Buy, 10.0, 100, "2024-01-02 09:00:00",
    )]);
    let report = run_analysis(&batch, &registry(), &with_sensitivity("X", Sensitivity::Good));

    assert_eq!(report.publication_alerts.len(), 1);
    assert_eq!(
        report.publication_alerts[0].publication_flag,
        Some(PublicationFlag::GoodNewsBuy)
    );
}

#[test]
fn scenario_b_insider_sell_on_good_news_is_quiet() {
    let batch = TradeBatch::new(vec![trade(
        "Director1", "X", Side::Sell, 10.0, 100, "2024-01-02 09:00:00",
    )]);
    let report = run_analysis(&batch, &registry(), &with_sensitivity("X", Sensitivity::Good));

    assert!(report.publication_alerts.is_empty());
    // The trade still appears as an insider trade.
    assert_eq!(report.directors.len(), 1);
    assert_eq!(report.directors[0].publication_flag, None);
}

// ─── Scenario C: publication rules are insider-only ──────────────────

#[test]
fn scenario_c_non_insider_never_gets_a_publication_flag() {
    let batch = TradeBatch::new(vec![trade(
        "Outsider", "X", Side::Buy, 10.0, 100, "2024-01-02 09:00:00",
    )]);
    let report = run_analysis(&batch, &registry(), &with_sensitivity("X", Sensitivity::Good));

    assert!(report.publication_alerts.is_empty());
    assert!(report.consolidated.is_empty());
}

// ─── Scenario D: empty scope after filtering ─────────────────────────

#[test]
fn scenario_d_empty_scope_yields_all_empty_tables() {
    let batch = TradeBatch::new(vec![trade(
        "Director1", "X", Side::Buy, 10.0, 100, "2024-06-15 09:00:00",
    )]);
    // January range excludes the June trade.
    let report = run_analysis(&batch, &registry(), &config_for_january());

    assert_eq!(report.analyzed, 0);
    assert!(report.directors.is_empty());
    assert!(report.shareholders.is_empty());
    assert!(report.board_members.is_empty());
    assert!(report.publication_alerts.is_empty());
    assert!(report.frequent_patterns.is_empty());
    assert!(report.consolidated.is_empty());
}

// ─── Classification ──────────────────────────────────────────────────

#[test]
fn every_insider_lands_in_exactly_one_category() {
    let batch = TradeBatch::new(vec![
        trade("Director1", "X", Side::Buy, 10.0, 100, "2024-01-02 09:00:00"),
        trade("Holder1", "X", Side::Buy, 10.0, 100, "2024-01-02 10:00:00"),
        trade("Board1", "X", Side::Buy, 10.0, 100, "2024-01-02 11:00:00"),
        trade("Outsider", "X", Side::Buy, 10.0, 100, "2024-01-02 12:00:00"),
    ]);
    let report = run_analysis(&batch, &registry(), &config_for_january());

    assert_eq!(report.directors.len(), 1);
    assert_eq!(report.shareholders.len(), 1);
    assert_eq!(report.board_members.len(), 1);
    assert_eq!(report.consolidated.len(), 3);
    assert_eq!(report.directors[0].watch_type, WatchType::Director);
    assert_eq!(report.shareholders[0].watch_type, WatchType::MajorShareholder);
    assert_eq!(report.board_members[0].watch_type, WatchType::BoardMember);
}

#[test]
fn overlapping_registry_roles_resolve_by_check_order() {
    let overlapping = InsiderRegistry::new(
        vec!["Dual".to_string()],
        vec!["Dual".to_string(), "SharedSB".to_string()],
        vec!["SharedSB".to_string()],
    );
    let batch = TradeBatch::new(vec![
        trade("Dual", "X", Side::Buy, 10.0, 100, "2024-01-02 09:00:00"),
        trade("SharedSB", "X", Side::Buy, 10.0, 100, "2024-01-02 10:00:00"),
    ]);
    let report = run_analysis(&batch, &overlapping, &config_for_january());

    assert_eq!(report.directors.len(), 1);
    assert_eq!(report.shareholders.len(), 1);
    assert!(report.board_members.is_empty());
}

// ─── Detector over the filtered scope ────────────────────────────────

#[test]
fn detector_sees_non_insider_trades_too() {
    let batch = TradeBatch::new(vec![
        trade("Outsider", "X", Side::Buy, 10.0, 100, "2024-01-02 09:00:00"),
        trade("Outsider", "X", Side::Sell, 10.0, 100, "2024-01-03 09:00:00"),
    ]);
    let report = run_analysis(&batch, &registry(), &config_for_january());

    assert_eq!(report.frequent_patterns.len(), 2);
    assert!(report.consolidated.is_empty());
}

#[test]
fn detector_ignores_trades_cut_by_the_prefilter() {
    // The matching sell falls outside the date range, so the buy has no
    // partner in scope.
    let batch = TradeBatch::new(vec![
        trade("C1", "X", Side::Buy, 10.0, 100, "2024-01-30 09:00:00"),
        trade("C1", "X", Side::Sell, 10.0, 100, "2024-02-01 09:00:00"),
    ]);
    let report = run_analysis(&batch, &registry(), &config_for_january());
    assert!(report.frequent_patterns.is_empty());
}

// ─── Idempotence ─────────────────────────────────────────────────────

#[test]
fn rerunning_an_unchanged_batch_yields_identical_output() {
    let batch = TradeBatch::new(vec![
        trade("Director1", "X", Side::Buy, 10.0, 100, "2024-01-02 09:00:00"),
        trade("C1", "X", Side::Buy, 10.0, 100, "2024-01-03 09:00:00"),
        trade("C1", "X", Side::Sell, 10.0, 100, "2024-01-04 09:00:00"),
        trade("Holder1", "Y", Side::Sell, 9.0, 50, "2024-01-05 09:00:00"),
    ]);
    let config = with_sensitivity("Y", Sensitivity::Bad);

    let first = run_analysis(&batch, &registry(), &config);
    let second = run_analysis(&batch, &registry(), &config);
    assert_eq!(first, second);
}
