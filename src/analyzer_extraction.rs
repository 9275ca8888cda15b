use crate::extraction_engine::ExtractionEngine;
use crate::EmbeddedFile;
use std::path::PathBuf;

/// Extraction and file discovery functionality for FilingAnalyzer.
impl super::FilingAnalyzer {
    // ── Embedded file discovery ───────────────────────────────────────────────

    /// Returns the number of slots in the embedded-file table, including
    /// entries that turn out to be unreadable.
    pub fn count_embedded_files(&self) -> usize {
        ExtractionEngine::new(self.document(), self.config()).count_files()
    }

    /// Returns `true` when the document contains at least one embedded file.
    pub fn has_embedded_files(&self) -> bool {
        self.count_embedded_files() > 0
    }

    // ── Extraction ────────────────────────────────────────────────────────────

    /// Read every embedded file without touching the file system.
    ///
    /// Unreadable entries are logged and left out.
    pub fn embedded_files(&self) -> Vec<EmbeddedFile> {
        ExtractionEngine::new(self.document(), self.config()).read_all_files()
    }

    /// Write every readable embedded file into
    /// [`ExtractorConfig::output_directory`] and return the written paths in
    /// table order.
    ///
    /// A broken entry never stops the rest; each failure is logged at `warn`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use adt1extract::FilingAnalyzer;
    ///
    /// let analyzer = FilingAnalyzer::from_path("Form ADT-1.pdf").unwrap();
    /// for path in analyzer.extract_attachments() {
    ///     println!("{}", path.display());
    /// }
    /// ```
    ///
    /// [`ExtractorConfig::output_directory`]: crate::ExtractorConfig::output_directory
    pub fn extract_attachments(&self) -> Vec<PathBuf> {
        ExtractionEngine::new(self.document(), self.config())
            .extract_all_to(&self.config().output_directory)
    }
}
