//! Function declarations, ordered by where they start.

use crate::model::FunctionDeclaration;
use crate::syntax::{SyntaxNode, Visitor};
use tracing::debug;

#[derive(Debug, Default)]
pub struct FunctionExtractor {
    functions: Vec<FunctionDeclaration>,
}

impl<'src> Visitor<'src> for FunctionExtractor {
    fn visit(&mut self, node: SyntaxNode<'src>) {
        if let SyntaxNode::FunctionDeclaration { name, start, end } = node {
            debug!(name, line = start.line, column = start.column, "found function");
            self.functions.push(FunctionDeclaration {
                name: name.to_string(),
                start,
                end,
            });
        }
    }
}

impl FunctionExtractor {
    /// Sort ascending by start position. The sort is stable, so two
    /// declarations sharing a start keep the order they were visited in.
    pub fn finish(mut self) -> Vec<FunctionDeclaration> {
        self.functions.sort_by_key(|f| f.start);
        self.functions
    }
}
