use std::{fmt::Write as _, io::Write, path::Path};

use line_ratio_domain::{AggregateStats, AuthorAnalysis, LineDetail, PatternMatch};
use line_ratio_infra::FileWriter;
use line_ratio_shared_kernel::{ErrorContext, InfrastructureError, Result};

/// Result of one analysis, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Summary(AggregateStats),
    Lines(Vec<LineDetail>),
    Matches(Vec<PatternMatch>),
    Author { author: String, analysis: AuthorAnalysis },
}

impl Report {
    /// Human-readable text for stdout.
    pub fn render_console(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = match self {
            Self::Summary(stats) => write_summary(&mut out, stats),
            Self::Lines(details) => write_lines(&mut out, details),
            Self::Matches(matches) => write_matches(&mut out, matches),
            Self::Author { author, analysis } => write_author(&mut out, author, analysis),
        };
        out
    }

    /// Pretty JSON (2-space indent) of the analysis result alone.
    pub fn to_json(&self) -> Result<String> {
        let json = match self {
            Self::Summary(stats) => serde_json::to_string_pretty(stats),
            Self::Lines(details) => serde_json::to_string_pretty(details),
            Self::Matches(matches) => serde_json::to_string_pretty(matches),
            Self::Author { analysis, .. } => serde_json::to_string_pretty(analysis),
        };
        Ok(json.map_err(InfrastructureError::from)?)
    }
}

/// Print `report` to `console`, or write it as JSON to `file` when one is given.
pub fn emit(report: &Report, file: Option<&Path>, console: &mut dyn Write) -> Result<()> {
    match file {
        Some(path) => {
            let json = report.to_json()?;
            FileWriter::atomic_write(path, json.as_bytes())
                .with_context(|| format!("saving report to {}", path.display()))
        }
        None => console
            .write_all(report.render_console().as_bytes())
            .and_then(|()| console.flush())
            .map_err(|source| InfrastructureError::FileWrite { path: "<stdout>".into(), source }.into()),
    }
}

fn write_author(out: &mut String, author: &str, analysis: &AuthorAnalysis) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "Analysis of {author} messages:")?;
    writeln!(out, "Total messages found: {}", analysis.total_messages)?;
    writeln!(out, "Total spaces: {}", analysis.total_spaces)?;
    writeln!(out, "Total words: {}", analysis.total_words)?;
    writeln!(out, "Overall space-to-word ratio: {:.2}", analysis.space_to_word_ratio)?;
    writeln!(out, "Overall maximum space-to-word ratio: {:.2}", analysis.max_space_to_word_ratio)
}

fn write_summary(out: &mut String, stats: &AggregateStats) -> std::fmt::Result {
    writeln!(out, "Total lines: {}", stats.total_lines)?;
    writeln!(out, "Total spaces: {}", stats.total_spaces)?;
    writeln!(out, "Total words: {}", stats.total_words)?;
    writeln!(out, "Average spaces per line: {:.2}", stats.average_spaces_per_line)?;
    writeln!(out, "Average words per line: {:.2}", stats.average_words_per_line)?;
    writeln!(out, "Overall space-to-word ratio: {:.2}", stats.overall_space_to_word_ratio)
}

fn write_lines(out: &mut String, details: &[LineDetail]) -> std::fmt::Result {
    for d in details {
        writeln!(
            out,
            "{:>6}: spaces={} words={} ratio={:.2} | {}",
            d.line_number, d.spaces, d.words, d.space_to_word_ratio, d.line
        )?;
    }
    Ok(())
}

fn write_matches(out: &mut String, matches: &[PatternMatch]) -> std::fmt::Result {
    for m in matches {
        writeln!(out, "{:>6}: {}", m.line_number, m.line)?;
    }
    writeln!(out, "{} matching lines", matches.len())
}
