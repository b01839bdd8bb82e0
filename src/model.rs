//! Data model for the structural index — parser-agnostic.

use crate::position::SourcePosition;
use std::collections::BTreeMap;

/// Label written for code lines that no function declaration encloses.
pub const OUTSIDE_OF_FUNCTION_DECLARATION: &str = "OUTSIDE_OF_FUNCTION_DECLARATION";

/// A function declared in the script.
///
/// Names may repeat (redeclaration is legal shell), so identity is the
/// name together with the start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub start: SourcePosition,
    /// Position of the last character of the declaration.
    pub end: SourcePosition,
}

impl FunctionDeclaration {
    pub fn contains(&self, pos: SourcePosition) -> bool {
        pos.is_within(self.start, self.end)
    }
}

/// A `# ...` comment, with its leading `#` kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub position: SourcePosition,
}

impl Comment {
    /// Comment text with the `#` marker and one following space removed.
    pub fn body(&self) -> &str {
        let text = self.text.strip_prefix('#').unwrap_or(&self.text);
        text.strip_prefix(' ').unwrap_or(text)
    }
}

/// Comments keyed by the line they sit on.
pub type CommentsByLine = BTreeMap<usize, Comment>;

/// A line holding executable syntax, located by its first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLine {
    pub position: SourcePosition,
}

impl CodeLine {
    pub fn line(&self) -> usize {
        self.position.line
    }
}

/// One row of the index: which function owns a given code line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub filename: String,
    /// Enclosing function name, or [`OUTSIDE_OF_FUNCTION_DECLARATION`].
    pub function: String,
    pub line: usize,
}

impl IndexRecord {
    pub fn is_outside(&self) -> bool {
        self.function == OUTSIDE_OF_FUNCTION_DECLARATION
    }
}
