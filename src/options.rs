use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Where a report goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportTarget {
    /// Human-readable summary on stdout
    Console,
    /// Pretty JSON written to the configured output file
    Sink,
}

/// Default width of `line`/`message` detail fields.
pub const DEFAULT_TRUNCATE: usize = line_ratio_domain::DISPLAY_WIDTH;

/// Default input file when neither `--input` nor the config file names one.
pub const DEFAULT_INPUT: &str = "input.txt";
