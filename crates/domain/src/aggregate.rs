// crates/domain/src/aggregate.rs
use regex::Regex;
use serde::Serialize;

use line_ratio_shared_kernel::{DomainError, DomainResult, LineCount, SpaceCount, WordCount, ratio};

use crate::{
    display::{DISPLAY_WIDTH, truncate_for_display},
    metrics::{LineStats, trim_whitespace},
};

/// Totals over every non-blank line of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total_lines: LineCount,
    pub total_spaces: SpaceCount,
    pub total_words: WordCount,
    pub average_spaces_per_line: f64,
    pub average_words_per_line: f64,
    pub overall_space_to_word_ratio: f64,
}

impl AggregateStats {
    fn from_totals(lines: LineCount, spaces: SpaceCount, words: WordCount) -> Self {
        Self {
            total_lines: lines,
            total_spaces: spaces,
            total_words: words,
            average_spaces_per_line: ratio(spaces.value(), lines.value()),
            average_words_per_line: ratio(words.value(), lines.value()),
            overall_space_to_word_ratio: spaces.per_word(words),
        }
    }
}

/// Metrics for one non-blank line, numbered by its position in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDetail {
    pub line_number: usize,
    pub line: String,
    pub spaces: SpaceCount,
    pub words: WordCount,
    pub space_to_word_ratio: f64,
}

/// A line that matched a [`LinePattern`], kept in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub line_number: usize,
    pub line: String,
}

/// A compiled search pattern.
#[derive(Debug, Clone)]
pub struct LinePattern {
    regex: Regex,
}

impl LinePattern {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPattern`] when `pattern` is not a valid regular expression.
    pub fn new(pattern: &str) -> DomainResult<Self> {
        Regex::new(pattern).map(|regex| Self { regex }).map_err(|err| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

fn is_blank(line: &str) -> bool {
    trim_whitespace(line).is_empty()
}

/// Aggregate metrics over all non-blank lines.
pub fn analyze_whole<I>(lines: I) -> AggregateStats
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut count = LineCount::zero();
    let mut spaces = SpaceCount::zero();
    let mut words = WordCount::zero();

    for line in lines {
        let line = line.as_ref();
        if is_blank(line) {
            continue;
        }
        let stats = LineStats::measure(line);
        count += 1;
        spaces += stats.spaces;
        words += stats.words;
    }

    AggregateStats::from_totals(count, spaces, words)
}

/// Per-line metrics for every non-blank line.
///
/// Blank lines still advance the 1-based line number. Metrics come from the full
/// line; only the `line` field is truncated.
pub fn analyze_per_line<I>(lines: I) -> Vec<LineDetail>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !is_blank(line.as_ref()))
        .map(|(index, line)| {
            let line = line.as_ref();
            let stats = LineStats::measure(line);
            LineDetail {
                line_number: index + 1,
                line: truncate_for_display(line, DISPLAY_WIDTH),
                spaces: stats.spaces,
                words: stats.words,
                space_to_word_ratio: stats.ratio,
            }
        })
        .collect()
}

/// Lines in which `pattern` matches anywhere, with their 1-based numbers.
pub fn find_matching<I>(lines: I, pattern: &LinePattern) -> Vec<PatternMatch>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line.as_ref()))
        .map(|(index, line)| PatternMatch { line_number: index + 1, line: line.as_ref().to_string() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 5] = ["hello world", "", "a b c d", "   ", "single"];

    #[test]
    fn whole_skips_blank_lines() {
        let stats = analyze_whole(SAMPLE);
        assert_eq!(stats.total_lines, 3usize);
        assert_eq!(stats.total_spaces, 4usize);
        assert_eq!(stats.total_words, 7usize);
        assert_eq!(stats.average_spaces_per_line, 4.0 / 3.0);
        assert_eq!(stats.average_words_per_line, 7.0 / 3.0);
        assert_eq!(stats.overall_space_to_word_ratio, 4.0 / 7.0);
    }

    #[test]
    fn separator_only_lines_are_blank() {
        let stats = analyze_whole(["\x1c\x1d\x1e\x1f", "a b"]);
        assert_eq!(stats.total_lines, 1usize);

        let details = analyze_per_line(["\x1f", "a b"]);
        assert_eq!(details.iter().map(|d| d.line_number).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn whole_over_nothing_is_all_zero() {
        let stats = analyze_whole(Vec::<String>::new());
        assert_eq!(stats, AggregateStats::default());
        assert_eq!(stats.overall_space_to_word_ratio, 0.0);
    }

    #[test]
    fn whole_with_only_punctuation_has_zero_ratio() {
        let stats = analyze_whole(["- -", "..."]);
        assert_eq!(stats.total_lines, 2usize);
        assert_eq!(stats.total_spaces, 1usize);
        assert_eq!(stats.total_words, 0usize);
        assert_eq!(stats.overall_space_to_word_ratio, 0.0);
        assert_eq!(stats.average_spaces_per_line, 0.5);
    }

    #[test]
    fn whole_totals_ignore_order() {
        let mut reversed = SAMPLE;
        reversed.reverse();
        assert_eq!(analyze_whole(SAMPLE), analyze_whole(reversed));
    }

    #[test]
    fn per_line_keeps_original_numbering() {
        let details = analyze_per_line(SAMPLE);
        let numbers: Vec<_> = details.iter().map(|d| d.line_number).collect();
        assert_eq!(numbers, vec![1, 3, 5]);
        assert_eq!(details[1].spaces, 3usize);
        assert_eq!(details[1].words, 4usize);
        assert_eq!(details[1].space_to_word_ratio, 0.75);
        assert_eq!(details[2].space_to_word_ratio, 0.0);
    }

    #[test]
    fn per_line_truncates_display_only() {
        let long = "ab ".repeat(20);
        assert_eq!(long.chars().count(), 60);

        let details = analyze_per_line([long.as_str()]);
        assert_eq!(details[0].line, format!("{}...", &long[..50]));
        assert_eq!(details[0].spaces, 20usize);
        assert_eq!(details[0].words, 20usize);
    }

    #[test]
    fn find_matching_counts_blank_lines_in_numbering() {
        let pattern = LinePattern::new(r"^\w+$").expect("valid");
        let matches = find_matching(SAMPLE, &pattern);
        assert_eq!(matches, vec![PatternMatch { line_number: 5, line: "single".to_string() }]);
    }

    #[test]
    fn find_matching_keeps_full_line() {
        let long = format!("needle {}", "x".repeat(80));
        let pattern = LinePattern::new("needle").expect("valid");
        let matches = find_matching(["nothing", long.as_str()], &pattern);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line_number, 2);
        assert_eq!(matches[0].line, long);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = LinePattern::new("(unclosed").unwrap_err();
        match err {
            DomainError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn serialized_field_names() {
        let json = serde_json::to_value(analyze_whole(["a b"])).expect("serializes");
        assert_eq!(json["total_lines"], 1);
        assert_eq!(json["total_spaces"], 1);
        assert_eq!(json["total_words"], 2);
        assert_eq!(json["overall_space_to_word_ratio"], 0.5);
    }
}
