// crates/domain/src/metrics.rs
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use line_ratio_shared_kernel::{SpaceCount, WordCount};

/// Count of the literal ASCII space (0x20). Tabs and other whitespace are not spaces here.
#[inline]
pub fn space_count(text: &str) -> SpaceCount {
    // 0x20 never appears inside a multi-byte UTF-8 sequence.
    SpaceCount::new(bytecount::count(text.as_bytes(), b' '))
}

/// Number of maximal runs of letters, numbers and underscores.
///
/// Apostrophes and hyphens split words: `"don't"` counts as two. Combining marks and
/// connector punctuation other than `_` split words too, so `"e\u{301}e"` is two.
pub fn word_count(text: &str) -> WordCount {
    static WORD: OnceLock<Regex> = OnceLock::new();
    let re = WORD.get_or_init(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));
    WordCount::new(re.find_iter(text).count())
}

/// Whitespace for trimming and blank-line checks: Unicode `White_Space` plus the
/// information separators `\x1c`..=`\x1f`.
pub fn is_trim_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// `text` without leading or trailing [`is_trim_whitespace`] characters.
pub fn trim_whitespace(text: &str) -> &str {
    text.trim_matches(is_trim_whitespace)
}

/// Spaces per word, exactly `0.0` when `text` has no words.
pub fn ratio(text: &str) -> f64 {
    LineStats::measure(text).ratio
}

/// Metrics for a single line or message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStats {
    pub spaces: SpaceCount,
    pub words: WordCount,
    pub ratio: f64,
}

impl LineStats {
    pub fn measure(text: &str) -> Self {
        let spaces = space_count(text);
        let words = word_count(text);
        Self { spaces, words, ratio: spaces.per_word(words) }
    }
}
