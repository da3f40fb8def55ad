//! Space/word statistics for text files and per-author chat logs.
//!
//! The binary is a thin wrapper over [`run`]; the analyses themselves live in
//! the workspace crates (`line_ratio_domain`, `line_ratio_usecase`, ...).

#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod options;
pub mod presentation;

use std::io::Write;

use line_ratio_infra::FileLineSource;
use line_ratio_shared_kernel::Result;
use line_ratio_usecase::TextAnalysis;

use crate::{
    args::Command,
    config::Config,
    presentation::{Report, emit},
};

pub use line_ratio_shared_kernel::{ErrorKind, LineRatioError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the configured analysis and report it to `console` or the configured file.
pub fn run(config: &Config, console: &mut dyn Write) -> Result<Report> {
    let report = analyse(config)?;
    emit(&report, config.report_file(), console)?;
    Ok(report)
}

/// Run the configured analysis without reporting it.
pub fn analyse(config: &Config) -> Result<Report> {
    let source = FileLineSource::new(&config.input);
    let analysis = TextAnalysis::new(&source);

    let report = match &config.command {
        Command::Author { marker, .. } => {
            Report::Author { author: marker.clone(), analysis: analysis.author(marker, config.truncate)? }
        }
        Command::Summary => Report::Summary(analysis.summary()?),
        Command::Lines => Report::Lines(analysis.per_line()?),
        Command::Grep { pattern } => Report::Matches(analysis.find_matching(pattern)?),
    };
    Ok(report)
}
