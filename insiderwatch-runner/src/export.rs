//! Report export — JSON, CSV, and Markdown artifact generation.
//!
//! Provides three export formats for surveillance results:
//! - **JSON**: full round-trip serialization with schema versioning
//! - **CSV**: one file per result table, plus the consolidated table
//! - **Markdown**: human-readable run summary
//!
//! All persisted artifacts include a `schema_version` field. Unknown
//! versions are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::runner::{ReportRow, SurveillanceRun, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a `SurveillanceRun` to pretty JSON.
pub fn export_json(run: &SurveillanceRun) -> Result<String> {
    serde_json::to_string_pretty(run).context("failed to serialize SurveillanceRun to JSON")
}

/// Deserialize a `SurveillanceRun` from JSON, rejecting unknown schema
/// versions.
pub fn import_json(json: &str) -> Result<SurveillanceRun> {
    let run: SurveillanceRun =
        serde_json::from_str(json).context("failed to deserialize SurveillanceRun from JSON")?;
    if run.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            run.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(run)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export one result table as CSV.
///
/// Columns: row, client, security, side, price, quantity, timestamp,
/// watch_type, publication_flag. An empty table renders as a header-only
/// file, never as an error.
pub fn export_table_csv(rows: &[ReportRow]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "row",
        "client",
        "security",
        "side",
        "price",
        "quantity",
        "timestamp",
        "watch_type",
        "publication_flag",
    ])?;

    for r in rows {
        wtr.write_record([
            &r.row.to_string(),
            &r.client,
            &r.security,
            &r.side.to_string(),
            &format!("{:.4}", r.price),
            &r.quantity.to_string(),
            &r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            &r.watch_type.map(|w| w.to_string()).unwrap_or_default(),
            &r.publication_flag
                .map(|f| f.to_string())
                .unwrap_or_default(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Markdown summary ───────────────────────────────────────────────

/// Generate a Markdown summary for a single surveillance run.
pub fn generate_summary(run: &SurveillanceRun) -> String {
    let mut md = String::with_capacity(1024);

    md.push_str("# Insider Trading Watchlist Report\n\n");

    md.push_str("## Run\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!(
        "| Period | {} to {} |\n",
        run.from_date, run.to_date
    ));
    md.push_str(&format!("| Trades Ingested | {} |\n", run.total_trades));
    md.push_str(&format!("| Trades In Scope | {} |\n", run.analyzed_trades));
    md.push_str(&format!("| Batch Hash | {} |\n", run.batch_hash));
    md.push('\n');

    let t = &run.tables;
    md.push_str("## Findings\n\n");
    md.push_str("| Table | Rows |\n");
    md.push_str("| --- | ---: |\n");
    md.push_str(&format!("| Directors | {} |\n", t.directors.len()));
    md.push_str(&format!("| ≥5% Shareholders | {} |\n", t.shareholders.len()));
    md.push_str(&format!("| Board Members | {} |\n", t.board_members.len()));
    md.push_str(&format!(
        "| Publication-Sensitive Alerts | {} |\n",
        t.publication_alerts.len()
    ));
    md.push_str(&format!(
        "| Frequent Trading Patterns | {} |\n",
        t.frequent_patterns.len()
    ));
    md.push_str(&format!(
        "| Consolidated Insider Trades | {} |\n",
        t.consolidated.len()
    ));
    md.push('\n');

    if t.consolidated.is_empty() && t.frequent_patterns.is_empty() {
        md.push_str("No insider activity or frequent-trading patterns in the selected range.\n");
    }

    md
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the full artifact set for a single surveillance run.
///
/// Creates a directory named `run_{timestamp}/` under `output_dir`
/// containing:
/// - `report.json` — the full `SurveillanceRun`
/// - one CSV per result table, plus `consolidated.csv`
/// - `summary.md` — the Markdown summary
///
/// Returns the path to the created directory.
pub fn save_artifacts(run: &SurveillanceRun, output_dir: &Path) -> Result<PathBuf> {
    let dirname = format!("run_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    std::fs::write(run_dir.join("report.json"), export_json(run)?)?;

    let tables = [
        ("directors.csv", &run.tables.directors),
        ("shareholders.csv", &run.tables.shareholders),
        ("board_members.csv", &run.tables.board_members),
        ("publication_alerts.csv", &run.tables.publication_alerts),
        ("frequent_patterns.csv", &run.tables.frequent_patterns),
        ("consolidated.csv", &run.tables.consolidated),
    ];
    for (name, rows) in tables {
        std::fs::write(run_dir.join(name), export_table_csv(rows)?)?;
    }

    std::fs::write(run_dir.join("summary.md"), generate_summary(run))?;

    Ok(run_dir)
}

/// Load a `SurveillanceRun` from an artifact directory's report.json.
///
/// Rejects unknown schema versions.
pub fn load_artifacts(dir: &Path) -> Result<SurveillanceRun> {
    let report_path = dir.join("report.json");
    let json = std::fs::read_to_string(&report_path)
        .with_context(|| format!("failed to read {}", report_path.display()))?;
    import_json(&json)
}
