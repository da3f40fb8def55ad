use itertools::process_results;
use line_ratio_domain::{
    AggregateStats, AuthorAnalysis, AuthorMarker, LineDetail, LinePattern, PatternMatch, analyze_author,
    analyze_per_line, analyze_whole, extract_messages, find_matching,
};
use line_ratio_ports::{LineSource, Lines};
use line_ratio_shared_kernel::{ErrorContext, Result};

/// Runs the domain analyses over one line source.
///
/// Every call opens its own stream; the first read or decode error stops the
/// scan and is returned without a partial result.
pub struct TextAnalysis<'a> {
    source: &'a dyn LineSource,
}

impl<'a> TextAnalysis<'a> {
    pub fn new(source: &'a dyn LineSource) -> Self {
        Self { source }
    }

    /// Whole content of the source.
    pub fn read_all(&self) -> Result<String> {
        self.source.read_all().with_context(|| format!("reading {}", self.source.name()))
    }

    /// Apply `f` to every line in order, keeping the `Some` results.
    pub fn map_lines<T, F>(&self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        self.finish(process_results(self.open()?, |lines| lines.filter_map(|line| f(&line)).collect()))
    }

    /// Totals and averages over all non-blank lines.
    pub fn summary(&self) -> Result<AggregateStats> {
        log::debug!("summarising {}", self.source.name());
        self.finish(process_results(self.open()?, |lines| analyze_whole(lines)))
    }

    /// Metrics for every non-blank line.
    pub fn per_line(&self) -> Result<Vec<LineDetail>> {
        log::debug!("measuring each line of {}", self.source.name());
        self.finish(process_results(self.open()?, |lines| analyze_per_line(lines)))
    }

    /// Lines matching `pattern`. The pattern is compiled before the source is opened.
    pub fn find_matching(&self, pattern: &str) -> Result<Vec<PatternMatch>> {
        let pattern = LinePattern::new(pattern)?;
        log::debug!("searching {} for /{}/", self.source.name(), pattern.as_str());
        self.finish(process_results(self.open()?, |lines| find_matching(lines, &pattern)))
    }

    /// Messages following `marker`, trimmed, blanks dropped.
    pub fn author_messages(&self, marker: &str) -> Result<Vec<String>> {
        let marker = AuthorMarker::new(marker)?;
        self.finish(process_results(self.open()?, |lines| extract_messages(lines, &marker)))
    }

    /// Per-message and aggregate statistics for `marker`'s author.
    pub fn author(&self, marker: &str, truncate_length: usize) -> Result<AuthorAnalysis> {
        let marker = AuthorMarker::new(marker)?;
        log::debug!("analysing messages of '{marker}' in {}", self.source.name());
        let analysis =
            self.finish(process_results(self.open()?, |lines| analyze_author(lines, &marker, truncate_length)))?;
        log::debug!("found {} messages for '{marker}'", analysis.total_messages);
        Ok(analysis)
    }

    fn open(&self) -> Result<Lines<'a>> {
        self.source.lines().with_context(|| format!("opening {}", self.source.name()))
    }

    fn finish<T>(&self, outcome: Result<T>) -> Result<T> {
        outcome.with_context(|| format!("reading {}", self.source.name()))
    }
}
