use crate::file_discovery::FileSpecEntry;
use crate::{pdf_utils, ExtractError, Result};
use lopdf::{Dictionary, Document, Object};

/// Handles parsing of file specifications and extraction of embedded file data.
///
/// Filename metadata and payload are read by separate calls so that a broken
/// name does not cost the payload, and vice versa.
pub struct FileSpecParser<'a> {
    document: &'a Document,
}

impl<'a> FileSpecParser<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Create an extraction error with consistent formatting.
    fn extraction_error(entry: &FileSpecEntry, message: &str) -> ExtractError {
        let name = entry.name.as_deref().unwrap_or("<unnamed>");
        ExtractError::ExtractionError(name.into(), message.into())
    }

    /// Resolve the entry's file specification dictionary (inline or referenced).
    fn spec_dict<'e>(&self, entry: &'e FileSpecEntry) -> Result<&'e Dictionary>
    where
        'a: 'e,
    {
        match entry.spec.as_reference() {
            Ok(id) => self
                .document
                .get_object(id)?
                .as_dict()
                .map_err(|_| Self::extraction_error(entry, "file spec is not a dictionary")),
            Err(_) => entry
                .spec
                .as_dict()
                .map_err(|_| Self::extraction_error(entry, "file spec is neither a reference nor a dictionary")),
        }
    }

    /// Return the stored filename: Unicode (/UF) preferred over ASCII (/F).
    ///
    /// Layout of a file specification (ISO 32000-1 §7.11.3):
    ///
    /// ```text
    /// <<
    ///   /Type  /Filespec
    ///   /F     (ascii filename)
    ///   /UF    (unicode filename)          ← preferred
    ///   /EF    << /F <stream-ref> /UF <stream-ref> >>
    /// >>
    /// ```
    pub fn filename(&self, entry: &FileSpecEntry) -> Result<String> {
        let spec_dict = self.spec_dict(entry)?;
        [b"UF" as &[u8], b"F"]
            .into_iter()
            .find_map(|key| pdf_utils::extract_string_from_dict(spec_dict, key))
            .ok_or_else(|| Self::extraction_error(entry, "file spec has neither /UF nor /F"))
    }

    /// Read the embedded stream's bytes, decoded through its `/Filter` chain
    /// when one is declared.
    pub fn payload(&self, entry: &FileSpecEntry) -> Result<Vec<u8>> {
        let spec_dict = self.spec_dict(entry)?;
        let ef_dict = self.resolve_ef_dictionary(spec_dict, entry)?;
        let stream = self.extract_embedded_stream(ef_dict, entry)?;

        if stream.dict.has(b"Filter") {
            stream.decompressed_content().map_err(|e| {
                Self::extraction_error(entry, &format!("cannot decode embedded stream: {e}"))
            })
        } else {
            Ok(stream.content.clone())
        }
    }

    /// Resolve the /EF dictionary, handling both inline and reference cases.
    fn resolve_ef_dictionary<'e>(&self, spec_dict: &'e Dictionary, entry: &FileSpecEntry) -> Result<&'e Dictionary>
    where
        'a: 'e,
    {
        let ef_val = spec_dict
            .get(b"EF")
            .map_err(|_| Self::extraction_error(entry, "missing /EF entry"))?;

        // Some producers store /EF as a reference instead of inline.
        pdf_utils::resolve_dict(self.document, ef_val)
            .ok_or_else(|| Self::extraction_error(entry, "/EF is not a dictionary"))
    }

    /// Extract the embedded file stream from the EF dictionary.
    fn extract_embedded_stream(&self, ef_dict: &Dictionary, entry: &FileSpecEntry) -> Result<&'a lopdf::Stream> {
        let stream_ref = ef_dict
            .get(b"UF")
            .or_else(|_| ef_dict.get(b"F"))
            .map_err(|_| Self::extraction_error(entry, "/EF has neither /F nor /UF"))?;

        let stream_id = stream_ref
            .as_reference()
            .map_err(|_| Self::extraction_error(entry, "/EF stream entry is not a reference"))?;

        self.document
            .get_object(stream_id)
            .and_then(Object::as_stream)
            .map_err(|_| Self::extraction_error(entry, "embedded stream object is not a stream"))
    }
}
