//! Text layer extraction.
//!
//! `lopdf` ends a line only where a text object ends (`ET`). Generators
//! usually write a whole form inside one `BT … ET` block and move between
//! lines with `Td`, `TD`, `T*`, `'`, `"` or `Tm`, so each page's content is
//! first rewritten to close and reopen the text object at every such move.
//! The rewrite happens on a copy; the caller's document is untouched.

use crate::Result;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId};
use std::path::Path;

/// Open the PDF at `path` and return the text of every page, in page order,
/// concatenated without any page-break marker.
///
/// Fails when the file cannot be opened or parsed.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let document = Document::load(path)?;
    extract_document_text(&document)
}

/// Same as [`extract_text`] for an already loaded document.
pub fn extract_document_text(document: &Document) -> Result<String> {
    let pages = document.get_pages();
    let mut lined = document.clone();
    let mut full_text = String::new();

    for (page_number, page_id) in &pages {
        if let Err(e) = split_page_lines(&mut lined, *page_id) {
            tracing::debug!(page = page_number, "page content left as is: {e}");
        }

        let page_text = lined.extract_text(&[*page_number])?;
        tracing::debug!(page = page_number, chars = page_text.len(), "page text extracted");
        full_text.push_str(&page_text);
    }

    Ok(full_text)
}

fn split_page_lines(document: &mut Document, page_id: ObjectId) -> Result<()> {
    let content = Content::decode(&document.get_page_content(page_id)?)?;
    let lined = split_text_lines(content);
    document.change_page_content(page_id, lined.encode()?)?;
    Ok(())
}

/// Rewrite `content` so that every line of text sits in its own text object.
///
/// `'` and `"` become `T*` followed by `Tj`. A move only starts a new line
/// when it changes the vertical position and some text was shown since the
/// last break.
fn split_text_lines(content: Content) -> Content {
    let mut operations = Vec::with_capacity(content.operations.len());
    let mut in_text = false;
    let mut shown = false;
    let mut matrix_y: Option<f32> = None;

    for op in content.operations {
        let starts_line = match op.operator.as_str() {
            "BT" => {
                in_text = true;
                shown = false;
                matrix_y = None;
                false
            }
            "ET" => {
                in_text = false;
                false
            }
            "Td" | "TD" => operand_f32(&op, 1).is_some_and(|ty| ty != 0.0),
            "T*" | "'" | "\"" => true,
            "Tm" => {
                let y = operand_f32(&op, 5);
                let moved = matrix_y.is_some() && y != matrix_y;
                matrix_y = y;
                moved
            }
            _ => false,
        };

        if in_text && starts_line && shown {
            operations.push(Operation::new("ET", vec![]));
            operations.push(Operation::new("BT", vec![]));
            shown = false;
        }

        match op.operator.as_str() {
            "'" | "\"" => {
                if let Some(text) = op.operands.last().cloned() {
                    operations.push(Operation::new("T*", vec![]));
                    operations.push(Operation::new("Tj", vec![text]));
                    shown = true;
                }
            }
            "Tj" | "TJ" => {
                operations.push(op);
                shown = true;
            }
            _ => operations.push(op),
        }
    }

    Content { operations }
}

fn operand_f32(op: &Operation, index: usize) -> Option<f32> {
    op.operands.get(index).and_then(|o| Object::as_float(o).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(content: &Content) -> Vec<&str> {
        content.operations.iter().map(|op| op.operator.as_str()).collect()
    }

    fn show(text: &str) -> Operation {
        Operation::new("Tj", vec![Object::string_literal(text)])
    }

    #[test]
    fn td_with_vertical_move_closes_the_text_object() {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Td", vec![40.into(), 800.into()]),
                show("CIN : U12345MH2020PTC111111"),
                Operation::new("Td", vec![0.into(), (-14).into()]),
                show("Auditor Name : Rao and Associates"),
                Operation::new("ET", vec![]),
            ],
        };

        let lined = split_text_lines(content);
        assert_eq!(ops(&lined), ["BT", "Td", "Tj", "ET", "BT", "Td", "Tj", "ET"]);
    }

    #[test]
    fn horizontal_move_stays_on_the_same_line() {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                show("Company Name :"),
                Operation::new("Td", vec![80.into(), 0.into()]),
                show("Acme Pvt Ltd"),
                Operation::new("ET", vec![]),
            ],
        };

        let lined = split_text_lines(content);
        assert_eq!(ops(&lined), ["BT", "Tj", "Td", "Tj", "ET"]);
    }

    #[test]
    fn quote_operators_become_next_line_and_show() {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                show("first"),
                Operation::new("'", vec![Object::string_literal("second")]),
                Operation::new(
                    "\"",
                    vec![0.into(), 0.into(), Object::string_literal("third")],
                ),
                Operation::new("ET", vec![]),
            ],
        };

        let lined = split_text_lines(content);
        assert_eq!(
            ops(&lined),
            ["BT", "Tj", "ET", "BT", "T*", "Tj", "ET", "BT", "T*", "Tj", "ET"]
        );
    }

    #[test]
    fn tm_breaks_only_when_y_changes() {
        let tm = |y: i64| Operation::new("Tm", vec![1.into(), 0.into(), 0.into(), 1.into(), 40.into(), y.into()]);
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                tm(800),
                show("a"),
                tm(800),
                show("b"),
                tm(786),
                show("c"),
                Operation::new("ET", vec![]),
            ],
        };

        let lined = split_text_lines(content);
        assert_eq!(ops(&lined), ["BT", "Tm", "Tj", "Tm", "Tj", "ET", "BT", "Tm", "Tj", "ET"]);
    }
}
