//! Filename sanitization for attachment names read out of a PDF.

use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Fold `name` to ASCII and return it, or `fallback` when nothing survives.
///
/// The name is NFKD-normalized and every non-ASCII code point is dropped, so
/// accented letters lose their marks (`"Résolution"` → `"Resolution"`) and
/// scripts without an ASCII decomposition disappear. Only the final path
/// component is kept, so a stored name cannot point outside the output
/// directory.
///
/// ```
/// use adt1extract::sanitize::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Résolution.pdf", "attachment_0"), "Resolution.pdf");
/// assert_eq!(sanitize_filename("日本語", "attachment_1"), "attachment_1");
/// ```
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let folded: String = name.nfkd().filter(char::is_ascii).collect();

    let base = Path::new(&folded)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    // Backslash is not a separator on unix but still means one to most readers.
    let base = base.rsplit('\\').next().unwrap_or_default();

    if base.is_empty() {
        fallback.to_string()
    } else {
        base.to_string()
    }
}
