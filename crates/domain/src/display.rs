// crates/domain/src/display.rs

/// Maximum number of characters kept in `line`/`message` detail fields.
pub const DISPLAY_WIDTH: usize = 50;

/// Marker appended to text cut at [`DISPLAY_WIDTH`].
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_chars` characters, appending [`ELLIPSIS`] when cut.
///
/// Counts Unicode scalar values so multi-byte text is never split mid-character.
/// Text of exactly `max_chars` characters is returned unchanged.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut shortened = String::with_capacity(cut + ELLIPSIS.len());
            shortened.push_str(&text[..cut]);
            shortened.push_str(ELLIPSIS);
            shortened
        }
        None => text.to_string(),
    }
}
