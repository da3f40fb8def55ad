//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate feeds a [`LineSource`](line_ratio_ports::LineSource) through the
//! domain analyses:
//!
//! - [`analysis`]: whole-text, per-line, pattern and author analyses
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod analysis;

pub use analysis::TextAnalysis;
