use crate::{fields, text, FormRecord, Result};

/// Text and form-field functionality for FilingAnalyzer.
impl super::FilingAnalyzer {
    // ── Text ──────────────────────────────────────────────────────────────────

    /// Returns the text of every page, concatenated in page order.
    pub fn text(&self) -> Result<String> {
        text::extract_document_text(self.document())
    }

    // ── Fields ────────────────────────────────────────────────────────────────

    /// Extract the eight form fields from the filing's text.
    ///
    /// Fields whose label is not found are left as empty strings.
    pub fn extract_fields(&self) -> Result<FormRecord> {
        Ok(fields::extract_fields(&self.text()?))
    }
}
