//! GitHub-flavored markdown renderer.

use crate::associate::DocumentedFunction;
use crate::model::IndexRecord;
use crate::render::{Renderer, INDEX_HEADER};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render_index(&self, records: &[IndexRecord]) -> String {
        let mut out = String::new();
        out.push_str(&format!("| {} |\n", INDEX_HEADER.join(" | ")));
        out.push_str("| --- | --- | ---: |\n");
        for record in records {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                cell(&record.filename),
                cell(&record.function),
                record.line
            ));
        }
        out
    }

    fn render_docs(&self, functions: &[DocumentedFunction]) -> String {
        let mut out = String::new();
        if functions.is_empty() {
            return out;
        }

        out.push_str("## Index\n\n");
        for doc in functions {
            let name = &doc.function.name;
            out.push_str(&format!("* [{}](#{})\n", name, github_slug(name)));
        }
        out.push('\n');

        for doc in functions {
            let f = &doc.function;
            out.push_str(&format!("### {}\n\n", f.name));
            out.push_str(&format!("Lines {}-{}.\n\n", f.start.line, f.end.line));
            let text = doc.doc_text();
            if !text.trim().is_empty() {
                out.push_str(text.trim_end());
                out.push_str("\n\n");
            }
        }
        out
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// GitHub heading anchor: lowercase, keep alphanumerics, spaces and
/// hyphens, then turn spaces into hyphens.
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, FunctionDeclaration};
    use crate::position::SourcePosition;

    fn documented(name: &str, comments: &[&str]) -> DocumentedFunction {
        DocumentedFunction {
            function: FunctionDeclaration {
                name: name.to_string(),
                start: SourcePosition::new(5, 1),
                end: SourcePosition::new(7, 1),
            },
            comments: comments
                .iter()
                .enumerate()
                .map(|(i, text)| Comment {
                    text: text.to_string(),
                    position: SourcePosition::new(i + 1, 1),
                })
                .collect(),
        }
    }

    #[test]
    fn slug_drops_punctuation() {
        assert_eq!(github_slug("string::trim"), "stringtrim");
        assert_eq!(github_slug("do_thing"), "dothing");
        assert_eq!(github_slug("log-it"), "log-it");
    }

    #[test]
    fn docs_have_index_and_sections() {
        let out = MarkdownRenderer.render_docs(&[
            documented("is::array", &["# Check whether a name", "# is an array."]),
            documented("bare", &[]),
        ]);
        assert_eq!(
            out,
            "## Index\n\n\
             * [is::array](#isarray)\n\
             * [bare](#bare)\n\n\
             ### is::array\n\n\
             Lines 5-7.\n\n\
             Check whether a name\nis an array.\n\n\
             ### bare\n\n\
             Lines 5-7.\n\n"
        );
    }

    #[test]
    fn no_functions_renders_nothing() {
        assert!(MarkdownRenderer.render_docs(&[]).is_empty());
    }

    #[test]
    fn index_table_escapes_pipes() {
        let out = MarkdownRenderer.render_index(&[IndexRecord {
            filename: "a|b.sh".to_string(),
            function: "f".to_string(),
            line: 2,
        }]);
        assert_eq!(
            out,
            "| filename | functionname | linenumber |\n| --- | --- | ---: |\n| a\\|b.sh | f | 2 |\n"
        );
    }
}
