use crate::file_discovery::{FileSpecDiscovery, FileSpecEntry};
use crate::file_parsing::FileSpecParser;
use crate::{EmbeddedFile, ExtractError, ExtractorConfig, Result};
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Central extraction engine that orchestrates the complete file extraction process.
pub struct ExtractionEngine<'a> {
    document: &'a Document,
    config: &'a ExtractorConfig,
}

impl<'a> ExtractionEngine<'a> {
    pub fn new(document: &'a Document, config: &'a ExtractorConfig) -> Self {
        Self { document, config }
    }

    fn entries(&self) -> Vec<FileSpecEntry> {
        FileSpecDiscovery::new(self.document)
            .collect_file_specs(self.config.include_annotation_attachments)
    }

    /// Count slots in the embedded-file table, readable or not.
    pub fn count_files(&self) -> usize {
        self.entries().len()
    }

    /// Read every embedded file that can be read, in table order.
    ///
    /// Entries whose payload cannot be read, or that exceed the configured
    /// size limit, are logged and skipped.
    pub fn read_all_files(&self) -> Vec<EmbeddedFile> {
        let parser = FileSpecParser::new(self.document);

        self.entries()
            .iter()
            .enumerate()
            .fold(Vec::new(), |mut files, (index, entry)| {
                match self.read_single_file(&parser, index, entry) {
                    Ok(file) => files.push(file),
                    Err(e) => tracing::warn!(index, source = ?entry.source, "skipping embedded file: {e}"),
                }
                files
            })
    }

    /// Read every embedded file and write it into `output_dir`, returning the
    /// written paths in table order. A failure on one entry never stops the rest.
    pub fn extract_all_to(&self, output_dir: &Path) -> Vec<PathBuf> {
        self.read_all_files()
            .into_iter()
            .fold(Vec::new(), |mut written, file| {
                match file.save_to_disk(output_dir) {
                    Ok(path) => {
                        tracing::info!(path = %path.display(), "attachment extracted");
                        written.push(path);
                    }
                    Err(e) => tracing::warn!(index = file.index, "failed to write attachment: {e}"),
                }
                written
            })
    }

    /// Read name metadata and payload for one entry.
    ///
    /// A metadata failure only costs the stored name; the payload decides
    /// whether the entry survives.
    fn read_single_file(
        &self,
        parser: &FileSpecParser<'_>,
        index: usize,
        entry: &FileSpecEntry,
    ) -> Result<EmbeddedFile> {
        let stored_name = match parser.filename(entry) {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::warn!(index, "failed to read attachment metadata: {e}");
                None
            }
        };

        let data = parser.payload(entry)?;
        self.validate_file_size(entry, stored_name.as_deref(), data.len())?;

        Ok(EmbeddedFile {
            index,
            stored_name,
            data,
        })
    }

    /// Validate that the file size doesn't exceed the configured maximum.
    fn validate_file_size(&self, entry: &FileSpecEntry, stored_name: Option<&str>, size: usize) -> Result<()> {
        match self.config.max_embedded_file_size {
            Some(limit) if size > limit => Err(ExtractError::FileSizeExceeded {
                name: stored_name
                    .or(entry.name.as_deref())
                    .unwrap_or_default()
                    .to_string(),
                size,
                limit,
            }),
            _ => Ok(()),
        }
    }
}
