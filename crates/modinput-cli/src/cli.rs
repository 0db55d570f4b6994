//! CLI argument definitions for the modular input child.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "modinput",
    version,
    about = "Modular input child - stream records to a host and answer configuration requests",
    long_about = "Modular input child process.\n\n\
                  Records go to stdout inside an open <stream> envelope; diagnostics go to\n\
                  stderr as severity-tagged lines. The host may also ask for parameter\n\
                  descriptors or send a proposed configuration for validation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    ///
    /// Stderr is also the diagnostics channel read by the host, so a log file
    /// keeps operator logs out of the host's ingestion.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a proposed configuration read from stdin or a file.
    Validate(ValidateArgs),

    /// Render parameter descriptors as <arg> fragments.
    Describe(DescribeArgs),

    /// Stream input lines to the host as records.
    Emit(EmitArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Read the validation request from a file instead of stdin.
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// JSON array of parameter descriptors.
    #[arg(long = "args", value_name = "PATH")]
    pub args: PathBuf,
}

#[derive(Parser)]
pub struct EmitArgs {
    /// Name of the input instance the records belong to.
    #[arg(long = "stanza")]
    pub stanza: String,

    /// Source override applied to every record.
    #[arg(long = "source")]
    pub source: Option<String>,

    /// Sourcetype override applied to every record.
    #[arg(long = "sourcetype")]
    pub sourcetype: Option<String>,

    /// Index override applied to every record.
    #[arg(long = "index")]
    pub index: Option<String>,

    /// Host override applied to every record.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Read lines from a file instead of stdin.
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,
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
