// crates/ports/src/line_source.rs
use line_ratio_shared_kernel::Result;

/// A lazily produced sequence of lines with terminators removed.
///
/// The iterator owns whatever handle backs it; dropping it releases the handle,
/// whether or not it was exhausted.
pub type Lines<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

/// Port for reading text input.
pub trait LineSource: Send + Sync {
    /// Human-readable name of the resource, used in logs and error context.
    fn name(&self) -> String;

    /// Entire decoded content as one string.
    fn read_all(&self) -> Result<String>;

    /// Open a fresh line stream. Each call starts again from the first line.
    fn lines(&self) -> Result<Lines<'_>>;
}
