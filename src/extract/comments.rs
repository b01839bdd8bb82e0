//! Comments indexed by source line.

use crate::model::{Comment, CommentsByLine};
use crate::syntax::{SyntaxNode, Visitor};
use tracing::debug;

#[derive(Debug, Default)]
pub struct CommentExtractor {
    comments: CommentsByLine,
}

impl<'src> Visitor<'src> for CommentExtractor {
    fn visit(&mut self, node: SyntaxNode<'src>) {
        let SyntaxNode::Comment { text, start } = node else {
            return;
        };

        // A shell comment runs to end of line, so one per line is the norm.
        // Should two ever share a line, the later visit wins.
        let replaced = self.comments.insert(
            start.line,
            Comment {
                text: text.to_string(),
                position: start,
            },
        );
        if let Some(previous) = replaced {
            debug!(
                line = start.line,
                previous = %previous.text,
                current = text,
                "comment replaced on the same line"
            );
        }
    }
}

impl CommentExtractor {
    pub fn finish(self) -> CommentsByLine {
        self.comments
    }
}
