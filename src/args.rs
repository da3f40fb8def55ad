use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, builder::TypedValueParser};

use crate::options::ReportTarget;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_ratio",
    version = crate::VERSION,
    about = "Space/word statistics for text files and chat logs"
)]
pub struct Args {
    /// Input text file (UTF-8) [default: input.txt]
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// File that receives the JSON report (empty: console)
    #[arg(
        short,
        long,
        global = true,
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub output: Option<PathBuf>,

    /// Report target; defaults to `sink` when an output file is configured
    #[arg(short, long, value_enum, global = true)]
    pub target: Option<ReportTarget>,

    /// YAML or JSON config file (input, output, target, truncate)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Analyse the messages of one author, e.g. `author "Carla Rus:"`
    Author {
        /// Literal marker that starts the author's messages
        marker: String,

        /// Width of the `message` detail field
        #[arg(long)]
        truncate: Option<usize>,
    },
    /// Totals and averages over all non-blank lines
    Summary,
    /// Metrics for every non-blank line
    Lines,
    /// Lines matching a regular expression
    Grep {
        /// Regular expression searched anywhere in each line
        pattern: String,
    },
}
