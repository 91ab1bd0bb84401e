//! CLI argument definitions for the validation report converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vrpt_ingest::DEFAULT_OUTLINE_DEPTH;
use vrpt_output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "vrpt-convert",
    version,
    about = "Convert wwPDB validation reports to mmCIF",
    long_about = "Convert wwPDB validation report XML (plain or gzip) into an mmCIF \
                  data block using a cached schema map.\n\n\
                  The schema map is taken from --schema-map, then $VRPT_SCHEMA_MAP, \
                  then schema/vrpt_schema_map.json."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one validation report.
    Convert(ConvertArgs),

    /// Print the element outline of a report.
    Inspect(InspectArgs),

    /// List the category translations of the schema map.
    Categories(CategoriesArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Validation report XML, optionally gzip-compressed (`.gz`).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Schema map JSON file.
    #[arg(long = "schema-map", value_name = "PATH")]
    pub schema_map: Option<PathBuf>,

    /// Output format (default: inferred from the output extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Parser)]
pub struct InspectArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Levels below the root element to print.
    #[arg(long = "depth", default_value_t = DEFAULT_OUTLINE_DEPTH)]
    pub depth: usize,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    /// Schema map JSON file.
    #[arg(long = "schema-map", value_name = "PATH")]
    pub schema_map: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Cif,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Cif => OutputFormat::Cif,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
