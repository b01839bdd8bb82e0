//! JSON renderer — structured output for tooling integration.

use crate::associate::DocumentedFunction;
use crate::model::IndexRecord;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_index(&self, records: &[IndexRecord]) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        out.push_str("  \"records\": [");
        if records.is_empty() {
            out.push_str("]\n");
        } else {
            out.push('\n');
            for (i, record) in records.iter().enumerate() {
                let comma = if i < records.len() - 1 { "," } else { "" };
                out.push_str(&format!(
                    "    {{ \"filename\": \"{}\", \"function\": \"{}\", \"line\": {} }}{}\n",
                    json_escape(&record.filename),
                    json_escape(&record.function),
                    record.line,
                    comma
                ));
            }
            out.push_str("  ]\n");
        }
        out.push_str("}\n");
        out
    }

    fn render_docs(&self, functions: &[DocumentedFunction]) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        out.push_str("  \"functions\": [");
        if functions.is_empty() {
            out.push_str("]\n");
        } else {
            out.push('\n');
            for (i, doc) in functions.iter().enumerate() {
                out.push_str(&render_function_json(doc));
                out.push_str(if i < functions.len() - 1 { ",\n" } else { "\n" });
            }
            out.push_str("  ]\n");
        }
        out.push_str("}\n");
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn render_function_json(doc: &DocumentedFunction) -> String {
    let f = &doc.function;
    let mut out = String::new();
    out.push_str("    {\n");
    out.push_str(&format!("      \"name\": \"{}\",\n", json_escape(&f.name)));
    out.push_str(&format!(
        "      \"start\": {{ \"line\": {}, \"column\": {} }},\n",
        f.start.line, f.start.column
    ));
    out.push_str(&format!(
        "      \"end\": {{ \"line\": {}, \"column\": {} }},\n",
        f.end.line, f.end.column
    ));
    out.push_str("      \"comments\": [");
    for (i, comment) in doc.comments.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!(
            "{{ \"line\": {}, \"text\": \"{}\" }}",
            comment.position.line,
            json_escape(&comment.text)
        ));
    }
    out.push_str("]\n");
    out.push_str("    }");
    out
}

fn json_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
