//! Node-by-node dump of a parsed script, for inspecting what the extractors see.

use crate::syntax::{SyntaxNode, SyntaxTree};
use std::fmt::Write;

/// One line per node, in walk order.
pub fn dump_structure(tree: &SyntaxTree<'_>) -> String {
    let mut out = String::new();
    tree.walk(&mut |node: SyntaxNode<'_>| {
        let start = node.start();
        // Writing into a String cannot fail.
        let _ = write!(out, "Node {} at ({}, {})", node.kind(), start.line, start.column);
        match node {
            SyntaxNode::FunctionDeclaration { name, end, .. } => {
                let _ = write!(out, ": name={} end=({}, {})", name, end.line, end.column);
            }
            SyntaxNode::Comment { text, .. } => {
                let _ = write!(out, ": {:?}", text);
            }
            SyntaxNode::Generic { token: true, .. } => out.push_str(": token"),
            SyntaxNode::Generic { .. } => {}
        }
        out.push('\n');
    });
    out
}
