// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod ratio;

pub use counts::{LineCount, SpaceCount, WordCount};
pub use ratio::ratio;
