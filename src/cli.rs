use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ensemble copula coupling: threshold probabilities, percentiles and members.
#[derive(Parser)]
#[command(
    name = "ecc",
    version,
    about = "Convert between threshold probabilities and percentile forecasts"
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
    /// Convert a threshold-exceedance grid into a percentile grid.
    Percentiles(PercentilesArgs),
    /// Resample a percentile grid at new percentiles.
    Resample(ResampleArgs),
    /// Turn an ensemble-member grid into threshold-exceedance probabilities.
    Threshold(ThresholdArgs),
}

/// Output percentile selection shared by `percentiles` and `resample`.
#[derive(clap::Args)]
pub struct PercentileSelection {
    /// Number of output percentiles (defaults to the input axis length).
    #[arg(short = 'n', long, conflicts_with = "percentiles")]
    pub count: Option<usize>,

    /// Explicit output percentiles as fractions, e.g. 0.1,0.5,0.9.
    #[arg(short, long, value_delimiter = ',')]
    pub percentiles: Option<Vec<f64>>,

    /// Draw random percentiles instead of evenly spaced ones.
    #[arg(long)]
    pub random: bool,

    /// Override the RNG seed from config (implies --random).
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Distribution bounds given on the command line.
#[derive(clap::Args)]
pub struct BoundsArgs {
    /// Lower distribution bound; overrides the config file.
    #[arg(long, requires = "upper", allow_hyphen_values = true)]
    pub lower: Option<f64>,

    /// Upper distribution bound; overrides the config file.
    #[arg(long, requires = "lower", allow_hyphen_values = true)]
    pub upper: Option<f64>,
}

/// Arguments for the `percentiles` subcommand.
#[derive(clap::Args)]
pub struct PercentilesArgs {
    /// Path to the input threshold grid (JSON).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the output percentile grid (JSON).
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub selection: PercentileSelection,

    #[command(flatten)]
    pub bounds: BoundsArgs,

    /// Relabel the output percentiles as realizations 0..n.
    #[arg(long)]
    pub as_realizations: bool,
}

/// Arguments for the `resample` subcommand.
#[derive(clap::Args)]
pub struct ResampleArgs {
    /// Path to the input percentile grid (JSON).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the output percentile grid (JSON).
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub selection: PercentileSelection,

    #[command(flatten)]
    pub bounds: BoundsArgs,

    /// Relabel the output percentiles as realizations 0..n.
    #[arg(long)]
    pub as_realizations: bool,
}

/// Arguments for the `threshold` subcommand.
#[derive(clap::Args)]
pub struct ThresholdArgs {
    /// Path to the input realization grid (JSON).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the output threshold grid (JSON).
    #[arg(short, long)]
    pub output: PathBuf,

    /// Thresholds in ascending order, e.g. 8,10,12.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        required = true,
        allow_hyphen_values = true
    )]
    pub thresholds: Vec<f64>,

    /// Fraction of each threshold over which truth values ramp linearly.
    #[arg(long)]
    pub fuzzy_factor: Option<f64>,

    /// Count values below each threshold as true.
    #[arg(long)]
    pub below: bool,
}
