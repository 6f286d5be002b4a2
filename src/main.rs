//! piperank - Main Entry Point
//!
//! Ranks tabular pipeline configurations by fitting a binary logistic
//! model and selecting the highest-probability row.

use clap::Parser;
use piperank::cli::{cmd_info, cmd_rank, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "piperank=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            data,
            categorical,
            max_iter,
            plot,
            scores,
            json,
        } => {
            cmd_rank(
                &data,
                categorical.as_deref(),
                max_iter,
                plot.as_deref(),
                scores.as_deref(),
                json.as_deref(),
            )?;
        }
        Commands::Info { data } => {
            cmd_info(&data)?;
        }
    }

    Ok(())
}
