//! Extractors — one typed pass over a [`SyntaxTree`] each.
//!
//! Every extractor is a [`Visitor`] that accumulates into local state and
//! hands its result back by value from `finish()`. Nothing is shared between
//! two walks of the same tree.

pub mod code_lines;
pub mod comments;
pub mod functions;

use crate::model::{CodeLine, CommentsByLine, FunctionDeclaration};
use crate::syntax::{SyntaxTree, Visitor};

pub use code_lines::CodeLineExtractor;
pub use comments::CommentExtractor;
pub use functions::FunctionExtractor;

/// All function declarations, sorted by start position.
pub fn load_functions(tree: &SyntaxTree<'_>) -> Vec<FunctionDeclaration> {
    run(tree, FunctionExtractor::default()).finish()
}

/// Comments keyed by the line they occupy.
pub fn load_comments(tree: &SyntaxTree<'_>) -> CommentsByLine {
    run(tree, CommentExtractor::default()).finish()
}

/// Lines carrying executable tokens, ascending.
pub fn load_code_lines(tree: &SyntaxTree<'_>) -> Vec<CodeLine> {
    run(tree, CodeLineExtractor::default()).finish()
}

fn run<'src, V: Visitor<'src>>(tree: &SyntaxTree<'src>, mut visitor: V) -> V {
    tree.walk(&mut visitor);
    visitor
}
