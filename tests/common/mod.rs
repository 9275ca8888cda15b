// Builds small filings in memory so the tests need no fixture files.
#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

pub const ADT1_LINES: &[&str] = &[
    "FORM NO. ADT-1",
    "Company Name : Acme Pvt Ltd",
    "CIN : U12345MH2020PTC111111",
    "Registered Office : 12 MG Road, Pune 411001",
    "Appointment Date : 29/09/2023",
    "Auditor Name : Rao and Associates",
    "Auditor Address : 4 Park Street, Kolkata 700016",
    "FRN : 012345S",
    "Appointment Type : New Appointment",
];

enum Entry {
    File {
        filename: Option<String>,
        data: Vec<u8>,
        compress: bool,
    },
    /// A name-tree slot whose value is not a file specification at all.
    Broken,
}

#[derive(Default)]
pub struct FilingBuilder {
    /// Encoded content stream of each page.
    pages: Vec<Vec<u8>>,
    entries: Vec<Entry>,
    annotation_files: Vec<(String, Vec<u8>)>,
}

impl FilingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page showing one text line per entry.
    pub fn page(mut self, lines: &[&str]) -> Self {
        self.pages.push(page_content(lines));
        self
    }

    /// Add a page holding all lines in a single text object, one `Td` move
    /// down between lines, the way most form generators write them.
    pub fn block_page(mut self, lines: &[&str]) -> Self {
        self.pages.push(block_page_content(lines));
        self
    }

    /// Like [`block_page`](Self::block_page) but moving with `TL` and `'`.
    pub fn quoted_page(mut self, lines: &[&str]) -> Self {
        self.pages.push(quoted_page_content(lines));
        self
    }

    pub fn attach(mut self, filename: &str, data: &[u8]) -> Self {
        self.entries.push(Entry::File {
            filename: Some(filename.into()),
            data: data.to_vec(),
            compress: false,
        });
        self
    }

    /// Attach with a FlateDecode-compressed stream.
    pub fn attach_compressed(mut self, filename: &str, data: &[u8]) -> Self {
        self.entries.push(Entry::File {
            filename: Some(filename.into()),
            data: data.to_vec(),
            compress: true,
        });
        self
    }

    /// Attach a payload whose file specification has neither /UF nor /F.
    pub fn attach_unnamed(mut self, data: &[u8]) -> Self {
        self.entries.push(Entry::File {
            filename: None,
            data: data.to_vec(),
            compress: false,
        });
        self
    }

    pub fn attach_broken(mut self) -> Self {
        self.entries.push(Entry::Broken);
        self
    }

    /// Attach a file through a /FileAttachment annotation on the first page.
    pub fn annotate(mut self, filename: &str, data: &[u8]) -> Self {
        self.annotation_files.push((filename.into(), data.to_vec()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let annots: Vec<Object> = self
            .annotation_files
            .iter()
            .map(|(name, data)| {
                let spec_id = add_file_spec(&mut doc, Some(name.as_str()), data, false);
                let annot_id = doc.add_object(dictionary! {
                    "Type" => "Annot",
                    "Subtype" => "FileAttachment",
                    "Rect" => vec![0.into(), 0.into(), 20.into(), 20.into()],
                    "Contents" => Object::string_literal(name.as_str()),
                    "FS" => spec_id,
                });
                annot_id.into()
            })
            .collect();

        let pages = if self.pages.is_empty() {
            vec![page_content(&[])]
        } else {
            self.pages
        };

        let mut kids: Vec<Object> = Vec::new();
        for (i, content) in pages.into_iter().enumerate() {
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Resources" => resources_id,
                "Contents" => content_id,
            };
            if i == 0 && !annots.is_empty() {
                page.set("Annots", annots.clone());
            }
            kids.push(doc.add_object(page).into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };

        if !self.entries.is_empty() {
            let mut names: Vec<Object> = Vec::new();
            for (i, entry) in self.entries.into_iter().enumerate() {
                let key = Object::string_literal(format!("entry-{i:03}"));
                let value = match entry {
                    Entry::File {
                        filename,
                        data,
                        compress,
                    } => add_file_spec(&mut doc, filename.as_deref(), &data, compress),
                    Entry::Broken => doc.add_object(Object::Integer(42)),
                };
                names.push(key);
                names.push(value.into());
            }
            let tree_id = doc.add_object(dictionary! { "Names" => names });
            catalog.set(
                "Names",
                dictionary! { "EmbeddedFiles" => tree_id },
            );
        }

        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).expect("in-memory PDF should serialize");
        out
    }
}

fn page_content(lines: &[&str]) -> Vec<u8> {
    let mut operations = Vec::new();
    for (n, line) in lines.iter().enumerate() {
        let y = 800 - 14 * n as i64;
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
        operations.push(Operation::new("Td", vec![40.into(), y.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    encode(operations)
}

fn block_page_content(lines: &[&str]) -> Vec<u8> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 10.into()]),
        Operation::new("Td", vec![40.into(), 800.into()]),
    ];
    for (n, line) in lines.iter().enumerate() {
        if n > 0 {
            operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
        }
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
    }
    operations.push(Operation::new("ET", vec![]));
    encode(operations)
}

fn quoted_page_content(lines: &[&str]) -> Vec<u8> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 10.into()]),
        Operation::new("TL", vec![14.into()]),
        Operation::new("Td", vec![40.into(), 814.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("'", vec![Object::string_literal(*line)]));
    }
    operations.push(Operation::new("ET", vec![]));
    encode(operations)
}

fn encode(operations: Vec<Operation>) -> Vec<u8> {
    Content { operations }
        .encode()
        .expect("page content should encode")
}

fn add_file_spec(doc: &mut Document, filename: Option<&str>, data: &[u8], compress: bool) -> ObjectId {
    let mut stream = Stream::new(dictionary! { "Type" => "EmbeddedFile" }, data.to_vec());
    if compress {
        stream.compress().expect("embedded stream should compress");
    }
    let stream_id = doc.add_object(stream);

    let mut spec: Dictionary = dictionary! {
        "Type" => "Filespec",
        "EF" => dictionary! { "F" => stream_id },
    };
    if let Some(name) = filename {
        spec.set("F", Object::string_literal(name));
        spec.set("UF", Object::string_literal(name));
    }
    doc.add_object(spec)
}

/// A standard filing: the ADT-1 text page and the given attachments.
pub fn adt1_filing() -> FilingBuilder {
    FilingBuilder::new().page(ADT1_LINES)
}
