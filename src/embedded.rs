use crate::{sanitize, sniff};
use std::path::{Path, PathBuf};

// ── EmbeddedFile ─────────────────────────────────────────────────────────────

/// A file that was embedded inside a PDF document.
#[derive(Debug, Clone)]
pub struct EmbeddedFile {
    /// Position in the document's embedded-file table (0-based).
    pub index: usize,

    /// The filename as stored in the file specification, if it could be read.
    pub stored_name: Option<String>,

    /// The raw, decoded file content.
    pub data: Vec<u8>,
}

impl EmbeddedFile {
    /// Synthetic name used when the stored name is missing or folds to nothing.
    pub fn fallback_name(&self) -> String {
        format!("attachment_{}", self.index)
    }

    /// The name this file is written under: the sanitized stored name plus
    /// the sniffed extension, unless the name already ends with it.
    ///
    /// ```
    /// # use adt1extract::EmbeddedFile;
    /// let file = EmbeddedFile { index: 0, stored_name: Some("consent.pdf".into()), data: b"%PDF-1.7".to_vec() };
    /// assert_eq!(file.output_name(), "consent.pdf");
    ///
    /// let file = EmbeddedFile { index: 3, stored_name: None, data: b"plain words".to_vec() };
    /// assert_eq!(file.output_name(), "attachment_3.txt");
    /// ```
    pub fn output_name(&self) -> String {
        let fallback = self.fallback_name();
        let name = match &self.stored_name {
            Some(stored) => sanitize::sanitize_filename(stored, &fallback),
            None => fallback,
        };

        let ext = sniff::extension_for(&self.data);
        if name.ends_with(ext) {
            name
        } else {
            format!("{name}{ext}")
        }
    }

    /// Write this file into `output_dir`, creating the directory if necessary.
    /// Returns the path that was written.
    pub fn save_to_disk<P: AsRef<Path>>(&self, output_dir: P) -> std::io::Result<PathBuf> {
        let dir = output_dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let dest = dir.join(self.output_name());
        std::fs::write(&dest, &self.data)?;
        Ok(dest)
    }
}
