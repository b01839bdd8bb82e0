//! Lines holding executable syntax.

use crate::model::CodeLine;
use crate::syntax::{SyntaxNode, Visitor};
use std::collections::BTreeMap;
use tracing::trace;

/// Records the first token seen on each line. Comments never count as code.
#[derive(Debug, Default)]
pub struct CodeLineExtractor {
    lines: BTreeMap<usize, CodeLine>,
}

impl<'src> Visitor<'src> for CodeLineExtractor {
    fn visit(&mut self, node: SyntaxNode<'src>) {
        let SyntaxNode::Generic {
            token: true, start, ..
        } = node
        else {
            return;
        };

        self.lines.entry(start.line).or_insert_with(|| {
            trace!(line = start.line, column = start.column, "found code line");
            CodeLine { position: start }
        });
    }
}

impl CodeLineExtractor {
    pub fn finish(self) -> Vec<CodeLine> {
        self.lines.into_values().collect()
    }
}
