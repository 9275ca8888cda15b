//! # adt1extract
//!
//! A Rust library for pulling structured data out of auditor-appointment
//! filings (Form ADT-1) delivered as PDF documents.
//!
//! ## What this crate does
//!
//! 1. **Extract text** — concatenates the text layer of every page.
//! 2. **Extract fields** — runs a fixed table of labelled regular expressions
//!    over that text and produces a [`FormRecord`] with eight fixed keys.
//! 3. **Extract attachments** — walks the embedded-file name tree, sanitizes
//!    each stored name, sniffs the payload type and writes it to disk.
//! 4. **Analyze attachments** — derives short [`Insight`]s from attachment
//!    names and from the text of `.txt`/`.pdf` attachments.
//! 5. **Summarize** — renders the record and insights as a narrative paragraph.
//!
//! ## Quick example
//!
//! ```no_run
//! use adt1extract::{process_filing, ExtractorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig {
//!     output_directory: "./output".into(),
//!     ..Default::default()
//! };
//!
//! let report = process_filing("Form ADT-1.pdf", &config)?;
//! println!("Company : {}", report.record.company_name);
//! for path in &report.attachments {
//!     println!("  {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod analyzer;
mod analyzer_extraction;
mod analyzer_fields;
mod embedded;
mod extraction_engine;
mod file_discovery;
mod file_parsing;
mod pdf_utils;

pub mod fields;
pub mod insights;
pub mod persist;
pub mod pipeline;
pub mod sanitize;
pub mod sniff;
pub mod summary;
pub mod text;

pub use analyzer::FilingAnalyzer;
pub use embedded::EmbeddedFile;
pub use fields::{extract_fields, FormField, FormRecord};
pub use insights::{analyze_attachments, Insight, InsightSet};
pub use persist::{load_record, save_record, save_summary};
pub use pipeline::{process_filing, process_filing_with, Progress, RunReport};
pub use summary::generate_summary;

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`FilingAnalyzer`] and [`process_filing`].
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Directory that receives `output.json`, `summary.txt` and every
    /// extracted attachment. Created on demand.
    pub output_directory: PathBuf,

    /// Name of the JSON file holding the [`FormRecord`].
    pub json_filename: String,

    /// Name of the plain-text summary file.
    pub summary_filename: String,

    /// If set, any single embedded file larger than this byte count is
    /// skipped with a warning. The remaining attachments are still written.
    pub max_embedded_file_size: Option<usize>,

    /// When `true`, files attached through page `/FileAttachment`
    /// annotations are extracted in addition to the document's
    /// `/EmbeddedFiles` name tree.
    pub include_annotation_attachments: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("output"),
            json_filename: "output.json".into(),
            summary_filename: "summary.txt".into(),
            max_embedded_file_size: None,
            include_annotation_attachments: false,
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A filesystem I/O error occurred (e.g. when loading or saving a file).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document parsed but lacks the structure needed to read it.
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// A single embedded file specification could not be read.
    #[error("Failed to extract embedded file '{0}': {1}")]
    ExtractionError(String, String),

    /// The underlying lopdf parser returned an error.
    #[error("PDF parse error: {0}")]
    ParseError(#[from] lopdf::Error),

    /// An embedded file exceeds the configured `max_embedded_file_size` limit.
    #[error("Embedded file '{name}' is {size} bytes, over the {limit} byte limit")]
    FileSizeExceeded {
        name: String,
        size: usize,
        limit: usize,
    },

    /// The form record could not be serialized or read back.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ExtractError>;
