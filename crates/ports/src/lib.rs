//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`line_source`]: where analysed text comes from
//!
//! The use cases depend on these traits only, so the domain and application
//! layers stay independent of the file system.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod line_source;

pub use line_source::{LineSource, Lines};
