//! InsiderWatch CLI — surveillance analysis commands.
//!
//! Commands:
//! - `analyze` — run a full surveillance pass and save report artifacts
//! - `check` — validate a trades file and run spec without analyzing

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use insiderwatch_core::data::read_trades;
use insiderwatch_runner::{run_surveillance, save_artifacts, RunSpec, SurveillanceRun};

#[derive(Parser)]
#[command(
    name = "insiderwatch",
    about = "InsiderWatch CLI — insider trading watchlist reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a surveillance pass over an executed-orders file.
    Analyze {
        /// Path to the executed-orders CSV file.
        #[arg(long)]
        trades: PathBuf,

        /// Path to the TOML run spec (filters, registry, publications).
        #[arg(long)]
        config: PathBuf,

        /// Output directory for report artifacts.
        #[arg(long, default_value = "reports")]
        output_dir: PathBuf,
    },
    /// Validate a trades file and run spec without producing artifacts.
    Check {
        /// Path to the executed-orders CSV file.
        #[arg(long)]
        trades: PathBuf,

        /// Path to the TOML run spec.
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            trades,
            config,
            output_dir,
        } => run_analyze(&trades, &config, &output_dir),
        Commands::Check { trades, config } => run_check(&trades, &config),
    }
}

fn run_analyze(trades: &PathBuf, config: &PathBuf, output_dir: &PathBuf) -> Result<()> {
    let spec = RunSpec::from_file(config)?;
    let run = run_surveillance(trades, &spec)?;

    print_summary(&run);

    let run_dir = save_artifacts(&run, output_dir)?;
    println!("Artifacts saved to: {}", run_dir.display());

    Ok(())
}

fn run_check(trades: &PathBuf, config: &PathBuf) -> Result<()> {
    let spec = RunSpec::from_file(config)?;
    // Surfaces date-range problems before touching the trades file.
    spec.analysis_config()?;

    let file = File::open(trades)
        .with_context(|| format!("failed to open trades file {}", trades.display()))?;
    let batch = read_trades(BufReader::new(file))?;

    println!("OK: {} trades, registry has {} accounts", batch.len(), spec.registry().len());
    Ok(())
}

fn print_summary(run: &SurveillanceRun) {
    println!();
    println!("=== Surveillance Report ===");
    println!("Period:              {} to {}", run.from_date, run.to_date);
    println!("Trades ingested:     {}", run.total_trades);
    println!("Trades in scope:     {}", run.analyzed_trades);
    println!("Batch hash:          {}", run.batch_hash);
    println!();
    println!("--- Findings ---");
    println!("Directors:           {}", run.tables.directors.len());
    println!("≥5% Shareholders:    {}", run.tables.shareholders.len());
    println!("Board Members:       {}", run.tables.board_members.len());
    println!("Publication alerts:  {}", run.tables.publication_alerts.len());
    println!("Frequent patterns:   {}", run.tables.frequent_patterns.len());
    println!("Consolidated:        {}", run.tables.consolidated.len());
    if run.tables.consolidated.is_empty() && run.tables.frequent_patterns.is_empty() {
        println!();
        println!("No insider activity in selected range.");
    }
    println!();
}
