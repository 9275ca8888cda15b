//! Writing the run's artifacts to the output directory.

use crate::{FormRecord, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Write `record` as 2-space indented JSON to `<output_dir>/<filename>`,
/// creating the directory and overwriting any existing file.
///
/// The file is pure ASCII: non-ASCII characters in values are written as
/// `\uXXXX` escapes (surrogate pairs outside the BMP).
pub fn save_record<P: AsRef<Path>>(record: &FormRecord, output_dir: P, filename: &str) -> Result<PathBuf> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let path = dir.join(filename);
    std::fs::write(&path, escape_non_ascii(&serde_json::to_string_pretty(record)?))?;
    tracing::info!(path = %path.display(), "form record saved");
    Ok(path)
}

/// Read a record previously written by [`save_record`].
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<FormRecord> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Write `summary` as UTF-8 text to `<output_dir>/<filename>`, creating the
/// directory and overwriting any existing file.
pub fn save_summary<P: AsRef<Path>>(summary: &str, output_dir: P, filename: &str) -> Result<PathBuf> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let path = dir.join(filename);
    std::fs::write(&path, summary)?;
    tracing::info!(path = %path.display(), "summary saved");
    Ok(path)
}

/// Non-ASCII can only occur inside JSON strings, so escaping every such
/// character in the serialized text keeps the document valid.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}
