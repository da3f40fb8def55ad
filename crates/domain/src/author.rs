// crates/domain/src/author.rs
use serde::Serialize;

use line_ratio_shared_kernel::{DomainError, DomainResult, LineCount, SpaceCount, WordCount};

use crate::{
    display::truncate_for_display,
    metrics::{LineStats, trim_whitespace},
};

/// Literal text that introduces an author's turn, e.g. `"Carla Rus:"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorMarker(String);

impl AuthorMarker {
    /// # Errors
    ///
    /// An empty marker would match every line, so it is rejected.
    pub fn new(marker: impl Into<String>) -> DomainResult<Self> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "author marker must not be empty".to_string() });
        }
        Ok(Self(marker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trimmed text after the first occurrence of the marker, if any remains.
    pub fn message_in<'a>(&self, line: &'a str) -> Option<&'a str> {
        let (_, rest) = line.split_once(self.0.as_str())?;
        let message = trim_whitespace(rest);
        (!message.is_empty()).then_some(message)
    }
}

impl std::fmt::Display for AuthorMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Messages written by `marker`'s author, in input order.
pub fn extract_messages<I>(lines: I, marker: &AuthorMarker) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines.into_iter().filter_map(|line| marker.message_in(line.as_ref()).map(str::to_string)).collect()
}

/// Metrics for a single extracted message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageDetail {
    pub message: String,
    pub spaces: SpaceCount,
    pub words: WordCount,
    pub ratio: f64,
}

/// Aggregated statistics for one author's messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthorAnalysis {
    pub total_messages: LineCount,
    pub total_spaces: SpaceCount,
    pub total_words: WordCount,
    pub space_to_word_ratio: f64,
    pub max_space_to_word_ratio: f64,
    pub messages: Vec<MessageDetail>,
}

impl AuthorAnalysis {
    fn record(&mut self, message: &str, truncate_length: usize) {
        let stats = LineStats::measure(message);

        self.total_messages += 1;
        self.total_spaces += stats.spaces;
        self.total_words += stats.words;
        // Strict comparison: ties keep the first maximum.
        if stats.ratio > self.max_space_to_word_ratio {
            self.max_space_to_word_ratio = stats.ratio;
        }

        self.messages.push(MessageDetail {
            message: truncate_for_display(message, truncate_length),
            spaces: stats.spaces,
            words: stats.words,
            ratio: stats.ratio,
        });
    }

    fn finish(mut self) -> Self {
        self.space_to_word_ratio = self.total_spaces.per_word(self.total_words);
        self
    }
}

/// Analyze every message of `marker`'s author.
///
/// `truncate_length` only shortens the `message` detail field; totals and the
/// maximum ratio always use the full message.
pub fn analyze_author<I>(lines: I, marker: &AuthorMarker, truncate_length: usize) -> AuthorAnalysis
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut analysis = AuthorAnalysis::default();
    for line in lines {
        if let Some(message) = marker.message_in(line.as_ref()) {
            analysis.record(message, truncate_length);
        }
    }
    analysis.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DISPLAY_WIDTH;

    const CHAT: [&str; 4] = ["Carla Rus: hello there", "Bob: hi", "Carla Rus:    ", "Carla Rus: second one"];

    fn carla() -> AuthorMarker {
        AuthorMarker::new("Carla Rus:").expect("non-empty marker")
    }

    #[test]
    fn extracts_non_blank_messages_in_order() {
        assert_eq!(extract_messages(CHAT, &carla()), vec!["hello there", "second one"]);
    }

    #[test]
    fn separator_only_messages_are_blank() {
        let lines = ["Carla Rus: \x1c\x1f ", "Carla Rus:\x1dkept\x1e"];
        assert_eq!(extract_messages(lines, &carla()), vec!["kept"]);
    }

    #[test]
    fn first_marker_occurrence_wins() {
        let lines = ["Bob: quoting Carla Rus: Carla Rus: twice"];
        assert_eq!(extract_messages(lines, &carla()), vec!["Carla Rus: twice"]);
    }

    #[test]
    fn empty_marker_is_rejected() {
        assert!(matches!(AuthorMarker::new(""), Err(DomainError::InvalidConfiguration { .. })));
    }

    #[test]
    fn analysis_totals_and_ratios() {
        let analysis = analyze_author(CHAT, &carla(), DISPLAY_WIDTH);
        assert_eq!(analysis.total_messages, 2usize);
        assert_eq!(analysis.total_spaces, 2usize);
        assert_eq!(analysis.total_words, 4usize);
        assert_eq!(analysis.space_to_word_ratio, 0.5);
        assert_eq!(analysis.max_space_to_word_ratio, 0.5);
        assert_eq!(analysis.messages[0].message, "hello there");
        assert_eq!(analysis.messages[1].ratio, 0.5);
    }

    #[test]
    fn max_ratio_tracks_the_largest_message() {
        let lines = ["X: a b", "X: word"];
        let marker = AuthorMarker::new("X:").expect("marker");
        let analysis = analyze_author(lines, &marker, DISPLAY_WIDTH);
        assert_eq!(analysis.max_space_to_word_ratio, 0.5);
        assert_eq!(analysis.messages[1].ratio, 0.0);
    }

    #[test]
    fn single_zero_ratio_message_keeps_zero_max() {
        let marker = AuthorMarker::new("X:").expect("marker");
        let analysis = analyze_author(["X: word"], &marker, DISPLAY_WIDTH);
        assert_eq!(analysis.max_space_to_word_ratio, 0.0);
    }

    #[test]
    fn no_messages_yields_all_zero() {
        let analysis = analyze_author(["Bob: hi", ""], &carla(), DISPLAY_WIDTH);
        assert_eq!(analysis, AuthorAnalysis::default());
    }

    #[test]
    fn long_message_is_truncated_but_measured_in_full() {
        let body = "w ".repeat(30);
        let line = format!("Carla Rus: {body}");
        let analysis = analyze_author([line.as_str()], &carla(), DISPLAY_WIDTH);

        let trimmed = body.trim();
        assert_eq!(trimmed.chars().count(), 59);
        assert_eq!(analysis.messages[0].message, format!("{}...", &trimmed[..50]));
        assert_eq!(analysis.total_spaces, 29usize);
        assert_eq!(analysis.total_words, 30usize);
    }

    #[test]
    fn custom_truncate_length_applies_to_detail_only() {
        let analysis = analyze_author(["Carla Rus: abcdef ghi"], &carla(), 3);
        assert_eq!(analysis.messages[0].message, "abc...");
        assert_eq!(analysis.total_words, 2usize);
    }

    #[test]
    fn serialized_shape() {
        let analysis = analyze_author(CHAT, &carla(), DISPLAY_WIDTH);
        let json = serde_json::to_value(&analysis).expect("serializes");
        assert_eq!(json["total_messages"], 2);
        assert_eq!(json["space_to_word_ratio"], 0.5);
        assert_eq!(json["messages"][1]["message"], "second one");
        assert_eq!(json["messages"][1]["spaces"], 1);
    }
}
