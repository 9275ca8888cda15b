//! Content sniffing: choose a file extension from a payload's magic bytes.

/// Detect the MIME type of `data`.
///
/// Magic-byte detection comes first. Payloads with no recognizable signature
/// are reported as `text/plain` when they read as text: UTF-8, UTF-16 behind
/// a byte order mark, or 8-bit text, with no control characters besides
/// tab, CR, LF and form feed. Anything else, including an empty payload,
/// yields `None`.
pub fn detect_mime(data: &[u8]) -> Option<String> {
    if let Some(kind) = infer::get(data) {
        return Some(kind.mime_type().to_string());
    }

    if !data.is_empty() && looks_like_text(data) {
        return Some("text/plain".to_string());
    }

    None
}

/// Map a payload to one of `.pdf`, `.txt`, `.doc`, `.docx`, `.xls`, `.jpg`
/// or the generic `.bin`.
///
/// ```
/// use adt1extract::sniff::extension_for;
///
/// assert_eq!(extension_for(b"%PDF-1.4\n"), ".pdf");
/// assert_eq!(extension_for(b"Board resolution dated 01/02/2023"), ".txt");
/// assert_eq!(extension_for(&[0x00, 0x01, 0x02]), ".bin");
/// ```
pub fn extension_for(data: &[u8]) -> &'static str {
    match detect_mime(data) {
        Some(mime) => extension_for_mime(&mime),
        None => ".bin",
    }
}

/// Substring checks are applied in a fixed order, so for example every
/// OOXML type (including spreadsheets) lands on `.docx`.
pub fn extension_for_mime(mime: &str) -> &'static str {
    const TABLE: &[(&str, &str)] = &[
        ("pdf", ".pdf"),
        ("text", ".txt"),
        ("msword", ".doc"),
        ("officedocument", ".docx"),
        ("excel", ".xls"),
        ("image", ".jpg"),
    ];

    TABLE
        .iter()
        .find(|(needle, _)| mime.contains(needle))
        .map(|(_, ext)| *ext)
        .unwrap_or(".bin")
}

fn looks_like_text(data: &[u8]) -> bool {
    match data {
        [0xFE, 0xFF, rest @ ..] => utf16_is_text(rest, u16::from_be_bytes),
        [0xFF, 0xFE, rest @ ..] => utf16_is_text(rest, u16::from_le_bytes),
        _ => match std::str::from_utf8(data) {
            Ok(s) => s.chars().all(is_text_char),
            // 8-bit text (Latin-1, Windows-1252): high bytes are printable.
            Err(_) => data
                .iter()
                .all(|&b| (b >= 0x20 && b != 0x7f) || is_text_char(char::from(b))),
        },
    }
}

fn utf16_is_text(data: &[u8], unit: fn([u8; 2]) -> u16) -> bool {
    data.len() % 2 == 0
        && char::decode_utf16(data.chunks_exact(2).map(|pair| unit([pair[0], pair[1]])))
            .all(|c| c.is_ok_and(is_text_char))
}

fn is_text_char(c: char) -> bool {
    !c.is_control() || matches!(c, '\n' | '\r' | '\t' | '\x0c')
}
