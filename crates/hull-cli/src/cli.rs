use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The kimhull developers",
    version,
    about = "kimhull CLI - Build binary convex-hull phase diagrams from OpenKIM binding-energy data and validate interatomic-potential models against reference hulls.",
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
    /// Build the lower-hull phase diagram for a binary species pair.
    Hull(HullArgs),
    /// Validate a model's lower hull against the first-principles reference hull.
    Compare(CompareArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The full diagram as a JSON document.
    Json,
    /// The composition points as CSV rows for external plotting.
    Csv,
}

/// Arguments for the `hull` subcommand.
#[derive(Args, Debug)]
pub struct HullArgs {
    /// The two species of the binary system, comma separated (e.g. 'Fe,Ni').
    /// The second species becomes the mole-fraction axis.
    #[arg(short, long, required = true, value_delimiter = ',', value_name = "SPECIES")]
    pub species: Vec<String>,

    /// OpenKIM model identifier to query test results for.
    /// When omitted, first-principles reference data are queried instead.
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Path for the output file. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// The two species of the binary system, comma separated (e.g. 'Fe,Ni').
    #[arg(short, long, required = true, value_delimiter = ',', value_name = "SPECIES")]
    pub species: Vec<String>,

    /// OpenKIM model identifier whose predicted hull is validated.
    #[arg(short, long, required = true, value_name = "MODEL")]
    pub model: String,

    /// Path for the JSON validation report. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
