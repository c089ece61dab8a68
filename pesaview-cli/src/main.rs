use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pesaview_analytics::{
    Dashboard, category_breakdown, direction_totals, monthly_buckets, summary_metrics,
    weekday_buckets,
};
use pesaview_core::TransactionRecord;
use pesaview_ingest::{RecordSource, load_transactions};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod fmt;
mod render;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "pesaview", version, about = "Spending analysis for M-Pesa CSV exports")]
struct Cli {
    /// CSV path or http(s) URL (overrides config)
    #[arg(long, global = true)]
    source: Option<String>,

    /// Config file (default: ~/.pesaview/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Key metrics: totals, net flow, average, top category
    Summary,

    /// Inflow vs outflow totals
    Flows,

    /// Spending by category
    Categories {
        /// Number of categories to show (default: dashboard.breakdown_limit)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Inflow and outflow per calendar month
    Monthly,

    /// Spending per day of week, Monday first
    Weekday,

    /// Every view from one snapshot
    Dashboard,

    /// Manage ~/.pesaview/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config (never overwrites)
    Init,

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut cfg = config::load_config(cli.config.as_deref())?;
    if let Some(source) = &cli.source {
        cfg.source.location = source.clone();
    }

    match &cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => {
                config::init_config(cli.config.as_deref())?;
            }
            ConfigCommand::Show => {
                let s = toml::to_string_pretty(&cfg).context("serialize config")?;
                println!("{s}");
            }
        },

        Command::Summary => {
            let records = load_snapshot(&cfg).await?;
            let metrics = summary_metrics(&records);
            emit(cli.json, &metrics, || render::summary(&metrics, &cfg.display))?;
        }

        Command::Flows => {
            let records = load_snapshot(&cfg).await?;
            let totals = direction_totals(&records);
            emit(cli.json, &totals, || render::flows(&totals, &cfg.display))?;
        }

        Command::Categories { top } => {
            let records = load_snapshot(&cfg).await?;
            let limit = top.unwrap_or(cfg.dashboard.breakdown_limit);
            let rows = category_breakdown(&records, limit);
            emit(cli.json, &rows, || render::categories(&rows, &cfg.display))?;
        }

        Command::Monthly => {
            let records = load_snapshot(&cfg).await?;
            let months = monthly_buckets(&records);
            emit(cli.json, &months, || render::monthly(&months, &cfg.display))?;
        }

        Command::Weekday => {
            let records = load_snapshot(&cfg).await?;
            let days = weekday_buckets(&records);
            emit(cli.json, &days, || render::weekday(&days, &cfg.display))?;
        }

        Command::Dashboard => {
            let records = load_snapshot(&cfg).await?;
            let dash = Dashboard::build(&records, &cfg.dashboard_options());
            emit(cli.json, &dash, || render::dashboard(&dash, &cfg.display))?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "pesaview=info",
        1 => "pesaview=debug",
        _ => "pesaview=trace",
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn load_snapshot(cfg: &Config) -> Result<Vec<TransactionRecord>> {
    let source = RecordSource::parse(&cfg.source.location);
    let loaded = load_transactions(&source).await.with_context(|| {
        format!("Failed to load transaction data from {source} (pass --source <path|url>)")
    })?;

    if loaded.records.is_empty() {
        tracing::warn!(%source, "no valid transactions; every view will be empty");
    }
    Ok(loaded.records)
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value).context("serialize output")?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
