use crate::pdf_utils;
use lopdf::{Document, Object, ObjectId};

/// Where a file specification was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecSource {
    /// The catalog's `/Names/EmbeddedFiles` name tree.
    NameTree,
    /// A `/FileAttachment` annotation on a page.
    Annotation,
}

/// One slot of the document's embedded-file table.
///
/// `spec` is kept as the raw value found in the tree (usually an indirect
/// reference). It is not validated here, so a broken entry still occupies
/// its index and fails later, in isolation, when it is parsed.
#[derive(Debug, Clone)]
pub struct FileSpecEntry {
    /// Key of the name-tree entry, or the annotation's `/Contents`/`/T` text.
    pub name: Option<String>,
    pub spec: Object,
    pub source: SpecSource,
}

/// Handles discovery of embedded file specifications from PDF documents.
///
/// Two sources are supported:
/// 1. The /Names/EmbeddedFiles name tree in the document catalog
/// 2. /FileAttachment annotations on pages (opt-in)
pub struct FileSpecDiscovery<'a> {
    document: &'a Document,
}

impl<'a> FileSpecDiscovery<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Collect the embedded-file table in document order: name-tree entries
    /// first, then (when `include_annotations` is set) annotation attachments
    /// page by page.
    pub fn collect_file_specs(&self, include_annotations: bool) -> Vec<FileSpecEntry> {
        let mut specs = self.collect_from_names_tree();
        if include_annotations {
            specs.extend(self.collect_from_annotations());
        }
        specs
    }

    /// Process a names array of `[key, value, key, value, …]`.
    fn process_names_array(names_array: &[Object]) -> Vec<FileSpecEntry> {
        names_array
            .chunks_exact(2)
            .map(|pair| FileSpecEntry {
                name: pair[0].as_str().ok().map(pdf_utils::decode_text_string),
                spec: pair[1].clone(),
                source: SpecSource::NameTree,
            })
            .collect()
    }

    /// Collect file specifications from the document's names tree.
    fn collect_from_names_tree(&self) -> Vec<FileSpecEntry> {
        let Ok(catalog) = self.document.catalog() else {
            return Vec::new();
        };

        let names_dict = match catalog.get(b"Names") {
            Ok(val) => pdf_utils::resolve_dict(self.document, val),
            Err(_) => None,
        };
        let Some(names_dict) = names_dict else {
            return Vec::new();
        };

        let Ok(ef_val) = names_dict.get(b"EmbeddedFiles") else {
            return Vec::new();
        };

        match ef_val.as_reference() {
            Ok(ef_id) => {
                let mut visited = Vec::new();
                self.walk_name_tree(ef_id, &mut visited)
            }
            Err(_) => ef_val
                .as_dict()
                .map(|dict| self.walk_node(dict, &mut Vec::new()))
                .unwrap_or_default(),
        }
    }

    /// Recursively walk a PDF name tree, collecting entries from leaf nodes.
    ///
    /// `visited` guards against reference cycles in malformed trees.
    fn walk_name_tree(&self, node_id: ObjectId, visited: &mut Vec<ObjectId>) -> Vec<FileSpecEntry> {
        if visited.contains(&node_id) {
            return Vec::new();
        }
        visited.push(node_id);

        match self.document.get_object(node_id).and_then(Object::as_dict) {
            Ok(node_dict) => self.walk_node(node_dict, visited),
            Err(_) => Vec::new(),
        }
    }

    fn walk_node(&self, node_dict: &lopdf::Dictionary, visited: &mut Vec<ObjectId>) -> Vec<FileSpecEntry> {
        let mut out = Vec::new();

        // Leaf node
        if let Some(arr) = node_dict
            .get(b"Names")
            .ok()
            .and_then(|v| pdf_utils::resolve_array(self.document, v))
        {
            out.extend(Self::process_names_array(arr));
        }

        // Intermediate node
        if let Some(kids) = node_dict
            .get(b"Kids")
            .ok()
            .and_then(|v| pdf_utils::resolve_array(self.document, v))
        {
            for kid in kids {
                if let Ok(kid_id) = kid.as_reference() {
                    out.extend(self.walk_name_tree(kid_id, visited));
                }
            }
        }

        out
    }

    /// Collect file specifications from page FileAttachment annotations.
    fn collect_from_annotations(&self) -> Vec<FileSpecEntry> {
        self.document
            .get_pages()
            .values()
            .flat_map(|page_id| self.process_page_annotations(*page_id))
            .collect()
    }

    /// Process annotations on a single page.
    fn process_page_annotations(&self, page_id: ObjectId) -> Vec<FileSpecEntry> {
        let annots = self
            .document
            .get_object(page_id)
            .and_then(Object::as_dict)
            .ok()
            .and_then(|page| page.get(b"Annots").ok())
            .and_then(|v| pdf_utils::resolve_array(self.document, v));

        let Some(annots) = annots else {
            return Vec::new();
        };

        annots
            .iter()
            .filter_map(|item| pdf_utils::resolve_dict(self.document, item))
            .filter_map(Self::file_attachment_entry)
            .collect()
    }

    /// Turn a `/FileAttachment` annotation into an entry; other subtypes are ignored.
    fn file_attachment_entry(dict: &lopdf::Dictionary) -> Option<FileSpecEntry> {
        let subtype = dict.get(b"Subtype").ok()?.as_name().ok()?;
        if subtype != b"FileAttachment" {
            return None;
        }

        let spec = dict.get(b"FS").ok()?.clone();
        let name = [b"Contents" as &[u8], b"T"]
            .into_iter()
            .find_map(|key| pdf_utils::extract_string_from_dict(dict, key));

        Some(FileSpecEntry {
            name,
            spec,
            source: SpecSource::Annotation,
        })
    }
}
