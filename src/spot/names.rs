//! Colorant name normalization
//!
//! Name objects in the pool hold the bytes lopdf decoded from the file
//! (`/Pantone#20877#20C` is stored as `Pantone 877 C`), so they are never
//! escape-decoded again here. Matching is done on the ASCII lower-cased form.

const SPACE_ESCAPE: &str = "#20";

/// Normalizes a colorant name for comparison.
///
/// Every `#20` is replaced by a space, then the result is lower-cased using
/// ASCII rules only. The replacement text never contains the escape, so a
/// single left-to-right pass is complete.
pub fn normalize(raw: &str) -> String {
    raw.replace(SPACE_ESCAPE, " ").to_ascii_lowercase()
}

/// Case-preserving text form of name bytes from the object pool.
///
/// Invalid UTF-8 sequences are replaced.
pub fn display_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}
