//! Command-line and environment configuration.

use crate::models::RenderOptions;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Output encoding for the merged blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One block per line, families separated by blank lines.
    #[default]
    Text,
    /// A JSON document with one array per family and the summary.
    Json,
}

/// Merge CIDR blocks into the minimal equivalent set.
///
/// Input files contain CIDR blocks (`NETWORK_ADDRESS[/PREFIX_LENGTH]`), one
/// per line. A missing prefix means a host address. `#` starts a comment and
/// empty lines are ignored. Use `-` to read from stdin.
#[derive(Parser, Debug, Clone)]
#[command(name = "ipmerge", version)]
pub struct Config {
    /// Input files with CIDR blocks.
    #[arg(value_name = "INPUT_FILES", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Write the result to FILE instead of the terminal.
    #[arg(short, long, value_name = "FILE", env = "IPMERGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// -v prints a merge summary to stderr, -vv also prints every merge.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Render IPv6 hex digits in uppercase.
    #[arg(long, env = "IPMERGE_UPPERCASE")]
    pub uppercase: bool,

    /// Render IPv6 addresses without `::` compression or zero stripping.
    #[arg(long, env = "IPMERGE_EXPLODED")]
    pub exploded: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "text", env = "IPMERGE_FORMAT")]
    pub format: OutputFormat,

    /// Skip lines that are not valid CIDR blocks instead of failing.
    #[arg(long)]
    pub skip_invalid: bool,

    /// log4rs configuration file, used when it exists.
    #[arg(long, value_name = "FILE", default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}

impl Config {
    /// Rendering options for every address in the output.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            compressed: !self.exploded,
            uppercase: self.uppercase,
        }
    }

    /// Whether the merge summary is printed.
    pub fn print_summary(&self) -> bool {
        self.verbose >= 1
    }

    /// Whether every merge event is printed.
    pub fn print_merges(&self) -> bool {
        self.verbose >= 2
    }

    /// Configuration for the given inputs with every option at its default.
    pub fn for_inputs(inputs: Vec<PathBuf>) -> Config {
        Config {
            inputs,
            output: None,
            verbose: 0,
            uppercase: false,
            exploded: false,
            format: OutputFormat::Text,
            skip_invalid: false,
            log_config: PathBuf::from("log4rs.yml"),
        }
    }
}
