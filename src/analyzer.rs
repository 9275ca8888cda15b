use crate::{ExtractError, ExtractorConfig, Result};
use lopdf::Document;
use std::path::Path;

// ── FilingAnalyzer ────────────────────────────────────────────────────────────

/// Entry point for reading one filing: its text, form fields and attachments.
///
/// The document is parsed once on construction; every later operation works
/// on that parsed copy.
///
/// # Creating an analyzer
///
/// ```no_run
/// use adt1extract::{FilingAnalyzer, ExtractorConfig};
///
/// // From a file path
/// let a = FilingAnalyzer::from_path("Form ADT-1.pdf").unwrap();
///
/// // From an in-memory buffer
/// let bytes = std::fs::read("Form ADT-1.pdf").unwrap();
/// let a = FilingAnalyzer::from_bytes(&bytes).unwrap();
///
/// // With custom configuration
/// let cfg = ExtractorConfig {
///     output_directory: "./out".into(),
///     max_embedded_file_size: Some(10 * 1024 * 1024),
///     ..Default::default()
/// };
/// let a = FilingAnalyzer::with_config("Form ADT-1.pdf", cfg).unwrap();
/// ```
pub struct FilingAnalyzer {
    document: Document,
    config: ExtractorConfig,
}

impl FilingAnalyzer {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Load a PDF from the file system.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_config(path, ExtractorConfig::default())
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::new(Document::load_mem(data)?, ExtractorConfig::default())
    }

    /// Load a PDF from the file system with a custom [`ExtractorConfig`].
    pub fn with_config<P: AsRef<Path>>(path: P, config: ExtractorConfig) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading filing");
        Self::new(Document::load(path)?, config)
    }

    /// Wrap an already parsed document. The document must have a catalog
    /// and at least one page; anything else has nothing to extract from.
    pub fn new(document: Document, config: ExtractorConfig) -> Result<Self> {
        document
            .catalog()
            .map_err(|e| ExtractError::InvalidPdf(format!("missing or invalid catalog: {e}")))?;

        if document.get_pages().is_empty() {
            return Err(ExtractError::InvalidPdf("document has no pages".into()));
        }

        Ok(Self { document, config })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns a reference to the underlying [`lopdf::Document`].
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns a reference to the active [`ExtractorConfig`].
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Number of pages in the filing.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }
}
