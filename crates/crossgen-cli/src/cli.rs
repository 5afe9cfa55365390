use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "crossgen contributors",
    version,
    about = "crossgen - Lay out a list of words as an interlocking crossword grid.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place the words of a word list on a grid and print the resulting layout.
    Generate(GenerateArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    // --- Core Arguments ---
    /// Path to the word list: one word per line, or a JSON array when the file ends in `.json`.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Export the finished layout as JSON to this path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Grid Overrides ---
    /// Grid size as WIDTHxHEIGHT (e.g. '15x10').
    #[arg(long, value_name = "WxH", conflicts_with_all = ["width", "height"])]
    pub size: Option<String>,

    /// Override the grid width.
    #[arg(short = 'W', long, value_name = "INT")]
    pub width: Option<usize>,

    /// Override the grid height.
    #[arg(short = 'H', long, value_name = "INT")]
    pub height: Option<usize>,

    // --- Search Overrides ---
    /// Wall-clock budget for each attempt, in seconds.
    #[arg(short = 't', long, value_name = "SECONDS")]
    pub time_limit: Option<f64>,

    /// Seed for the random generator. A fresh seed is drawn when omitted.
    #[arg(long, value_name = "U64")]
    pub seed: Option<u64>,

    /// Number of shuffled attempts; the attempt placing the most words is kept.
    #[arg(short, long, value_name = "INT")]
    pub attempts: Option<usize>,

    /// Keep the word list in input order instead of shuffling it.
    #[arg(long)]
    pub no_shuffle: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.attempts=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
