//! CSV renderer — the index as comma-separated rows.

use crate::associate::DocumentedFunction;
use crate::model::IndexRecord;
use crate::render::{Renderer, INDEX_HEADER};

pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn render_index(&self, records: &[IndexRecord]) -> String {
        let mut out = String::new();
        write_row(&mut out, &INDEX_HEADER);
        for record in records {
            write_row(
                &mut out,
                &[
                    record.filename.as_str(),
                    record.function.as_str(),
                    record.line.to_string().as_str(),
                ],
            );
        }
        out
    }

    fn render_docs(&self, functions: &[DocumentedFunction]) -> String {
        let mut out = String::new();
        write_row(&mut out, &["functionname", "startline", "endline", "doc"]);
        for doc in functions {
            write_row(
                &mut out,
                &[
                    doc.function.name.as_str(),
                    doc.function.start.line.to_string().as_str(),
                    doc.function.end.line.to_string().as_str(),
                    doc.doc_text().as_str(),
                ],
            );
        }
        out
    }

    fn file_extension(&self) -> &str {
        "csv"
    }
}

fn write_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&csv_escape(field));
    }
    out.push('\n');
}

/// Quote a field when it holds a separator, quote, line break, or starts
/// with whitespace. Embedded quotes are doubled.
fn csv_escape(field: &str) -> String {
    let needs_quotes = field.contains([',', '"', '\r', '\n'])
        || field.starts_with(char::is_whitespace);
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
