//! Text canonicalization applied before any length measurement.
//!
//! Bengali uses combining vowel signs and conjuncts, so the same visible text
//! can arrive as different code-point sequences. Everything downstream counts
//! characters, which only works once the input is in a single canonical form.

use unicode_normalization::UnicodeNormalization;

/// Normalize `text` to NFC and collapse every whitespace run to one ASCII space.
///
/// Whitespace is Unicode `White_Space` plus the ASCII information separators
/// U+001C..=U+001F. Leading and trailing whitespace is removed. The function
/// is idempotent.
///
/// ```rust
/// use bangla_chunk_core::normalize::normalize;
///
/// assert_eq!(normalize("  আমার\n\nসোনার\tবাংলা "), "আমার সোনার বাংলা");
/// ```
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    let mut out = String::with_capacity(composed.len());
    for word in composed.split(is_separator).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
