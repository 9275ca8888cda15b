//! Shared PDF parsing utilities used across multiple modules.

/// Extract a text-string value from a PDF dictionary for a given key.
///
/// Returns `Some(String)` if the key exists and holds a non-empty string,
/// `None` otherwise.
pub fn extract_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key)
        .ok()
        .and_then(|v| v.as_str().ok())
        .map(decode_text_string)
        .filter(|s| !s.is_empty())
}

/// Decode a PDF text string.
///
/// Strings starting with the UTF-16BE byte-order mark `FE FF` are decoded as
/// UTF-16; everything else is read as UTF-8, replacing invalid sequences.
pub fn decode_text_string(bytes: &[u8]) -> String {
    match bytes.strip_prefix(&[0xFE, 0xFF]) {
        Some(rest) => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        None => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Resolve a value that might be inline or a reference to a dictionary.
pub fn resolve_dict<'a>(
    document: &'a lopdf::Document,
    value: &'a lopdf::Object,
) -> Option<&'a lopdf::Dictionary> {
    match value.as_reference() {
        Ok(id) => document.get_object(id).ok()?.as_dict().ok(),
        Err(_) => value.as_dict().ok(),
    }
}

/// Resolve a value that might be inline or a reference to an array.
pub fn resolve_array<'a>(
    document: &'a lopdf::Document,
    value: &'a lopdf::Object,
) -> Option<&'a Vec<lopdf::Object>> {
    match value.as_reference() {
        Ok(id) => document.get_object(id).ok()?.as_array().ok(),
        Err(_) => value.as_array().ok(),
    }
}
