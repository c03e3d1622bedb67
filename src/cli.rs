use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Helios diffuse-fraction separation models.
#[derive(Parser)]
#[command(
    name = "helios",
    version,
    about = "Diffuse-fraction separation models for solar irradiance"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a separation model over a predictor table.
    Evaluate(EvaluateArgs),
    /// List the registered separation models.
    Models,
}

/// Arguments for the `evaluate` subcommand.
#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// Separation model identifier (see `helios models`). Overrides the
    /// config file's `model` entry.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to input predictor Parquet file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for kd output Parquet file. Defaults to the input path with
    /// a `.kd.parquet` extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
