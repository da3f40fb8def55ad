// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod line_source;
pub mod persistence;

pub use line_source::{FileLineSource, FileLines};
pub use persistence::{FileReader, FileWriter};
