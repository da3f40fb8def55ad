//! # Domain
//!
//! Pure line statistics: nothing in this crate touches the file system.
//!
//! - [`metrics`]: space/word counts and their ratio for one piece of text
//! - [`aggregate`]: whole-text totals, per-line detail and pattern search
//! - [`author`]: author-marker message extraction and analysis
//! - [`display`]: truncation of text for report detail fields
//!
//! Every analysis takes an iterator of lines so callers decide how lines are
//! produced and when the underlying resource is released.

#![allow(clippy::multiple_crate_versions)]

pub mod aggregate;
pub mod author;
pub mod display;
pub mod metrics;

pub use aggregate::{AggregateStats, LineDetail, LinePattern, PatternMatch, analyze_per_line, analyze_whole, find_matching};
pub use author::{AuthorAnalysis, AuthorMarker, MessageDetail, analyze_author, extract_messages};
pub use display::{DISPLAY_WIDTH, ELLIPSIS, truncate_for_display};
pub use metrics::{LineStats, is_trim_whitespace, ratio, space_count, trim_whitespace, word_count};
