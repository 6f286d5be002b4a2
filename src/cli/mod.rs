//! piperank CLI module
//!
//! Command-line interface for ranking configuration datasets and
//! inspecting input files.

use clap::{Parser, Subcommand};
use colored::*;
use polars::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

use crate::data::CsvLoader;
use crate::export;
use crate::ranking::{RankConfig, RankEngine};
use crate::visualization::ScatterPlot;

// ─── Styling helpers ───────────────────────────────────────────────────────────

fn dim(s: &str) -> ColoredString {
    s.truecolor(100, 100, 100)
}
fn accent(s: &str) -> ColoredString {
    s.truecolor(120, 170, 255)
}
fn muted(s: &str) -> ColoredString {
    s.truecolor(140, 140, 140)
}
fn ok(s: &str) -> ColoredString {
    s.truecolor(100, 210, 120)
}

fn step_run(msg: &str) {
    print!("  {} {}... ", accent("›"), msg);
}

fn step_done(detail: &str) {
    println!("{} {}", ok("done"), dim(detail));
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(56)));
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "piperank")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rank tabular pipeline configurations with a logistic model")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank configurations and report the optimal row
    Rank {
        /// Input CSV file (UTF-8, GBK, or UTF-16)
        #[arg(short, long)]
        data: PathBuf,

        /// Name of the categorical column to encode and exclude
        #[arg(short, long)]
        categorical: Option<String>,

        /// Maximum optimizer iterations
        #[arg(long, default_value = "1000")]
        max_iter: usize,

        /// Write a scatter plot of the first feature column to this SVG file
        #[arg(long)]
        plot: Option<PathBuf>,

        /// Write the input rows with predicted probabilities to this CSV file
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Write the selection report to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Show information about an input file
    Info {
        /// Input CSV file
        #[arg(short, long)]
        data: PathBuf,
    },
}

// ─── Commands ──────────────────────────────────────────────────────────────────

pub fn cmd_rank(
    data_path: &PathBuf,
    categorical: Option<&str>,
    max_iter: usize,
    plot: Option<&std::path::Path>,
    scores: Option<&std::path::Path>,
    json: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    section("Rank");

    step_run("Loading data");
    let start = Instant::now();
    let loaded = CsvLoader::new().load(data_path)?;
    step_done(&format!(
        "{} rows × {} cols ({}) in {:?}",
        loaded.df.height(),
        loaded.df.width(),
        loaded.encoding,
        start.elapsed()
    ));

    let mut config = RankConfig::new().with_max_iter(max_iter);
    if let Some(column) = categorical {
        config = config.with_categorical_column(column);
    }

    step_run("Fitting logistic model");
    let start = Instant::now();
    let mut engine = RankEngine::new(config);
    let report = engine.run(&loaded.df)?;
    step_done(&format!("{:?}", start.elapsed()));

    println!();
    println!(
        "  {:<16} {}",
        muted("Optimal index"),
        report.selection.index.to_string().white().bold()
    );
    println!(
        "  {:<16} {}",
        muted("Probability"),
        format!("{:.4}", report.selection.probability).white().bold()
    );
    println!(
        "  {:<16} {}",
        muted("Accuracy"),
        format!("{:.4}", report.train_accuracy).white()
    );

    section("Optimal configuration");
    for (name, value) in report.feature_names.iter().zip(report.selected_row.iter()) {
        println!("  {:<20} {}", muted(name), format!("{value}").white());
    }
    println!();

    if let Some(path) = plot {
        let values = feature_column(&loaded.df, &report.feature_names[0])?;
        ScatterPlot::new()
            .with_y_label(&report.feature_names[0])
            .write_svg(path, &values, report.selection.index)?;
        println!("  {} plot → {}", ok("✓"), path.display());
    }

    if let Some(path) = scores {
        export::write_scores_csv(&loaded.df, &report.probabilities, path)?;
        println!("  {} scores → {}", ok("✓"), path.display());
    }

    if let Some(path) = json {
        export::write_json_report(&report, path)?;
        println!("  {} report → {}", ok("✓"), path.display());
    }

    Ok(())
}

pub fn cmd_info(data_path: &PathBuf) -> anyhow::Result<()> {
    section("Data Info");

    let loaded = CsvLoader::new().load(data_path)?;

    println!("  {:<12} {}", muted("File"), data_path.display());
    println!("  {:<12} {}", muted("Encoding"), loaded.encoding);
    println!("  {:<12} {}", muted("Rows"), loaded.df.height());
    println!("  {:<12} {}", muted("Columns"), loaded.df.width());
    println!();

    println!(
        "  {:<20} {:<12} {:>6} {:>8}",
        muted("Column"),
        muted("Type"),
        muted("Nulls"),
        muted("Unique")
    );
    println!("  {}", dim(&"─".repeat(50)));

    for col in loaded.df.get_columns() {
        println!(
            "  {:<20} {:<12} {:>6} {:>8}",
            col.name(),
            format!("{:?}", col.dtype()).truecolor(140, 140, 140),
            col.null_count(),
            col.n_unique().unwrap_or(0)
        );
    }

    println!();
    Ok(())
}

fn feature_column(df: &DataFrame, name: &str) -> anyhow::Result<Vec<f64>> {
    let casted = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(casted.f64()?.into_no_null_iter().collect())
}
