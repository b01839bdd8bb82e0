//! Parser boundary — tree-sitter-bash behind a closed node enumeration.
//!
//! The rest of the crate never touches tree-sitter nodes directly. A parsed
//! [`SyntaxTree`] is walked depth-first and each node is handed to a
//! [`Visitor`] as one of three [`SyntaxNode`] variants, so every extractor is
//! a single typed pass over the tree.

use crate::position::SourcePosition;
use derive_more::{Display, Error};
use tree_sitter::{Node, Parser, Tree};

const FUNCTION_DEFINITION: &str = "function_definition";
const COMMENT: &str = "comment";

/// Constructs whose closing delimiter may sit on a later line than the opener.
const MULTI_LINE_PARENTS: &[&str] = &[
    "string",
    "raw_string",
    "translated_string",
    "heredoc_redirect",
];

/// Why a script could not be turned into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The script is not valid shell syntax.
    #[display("{position}: {message}")]
    Syntax {
        message: String,
        position: SourcePosition,
    },
    /// The grammar could not be loaded or produced no tree at all.
    #[display("parser unavailable: {message}")]
    Unavailable { message: String },
}

impl ParseError {
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            ParseError::Syntax { position, .. } => Some(*position),
            ParseError::Unavailable { .. } => None,
        }
    }
}

/// One node of the tree, as seen by a [`Visitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxNode<'src> {
    /// Any node that is neither a function declaration nor a comment.
    Generic {
        kind: &'src str,
        start: SourcePosition,
        /// Leaf carrying non-blank source text.
        token: bool,
    },
    FunctionDeclaration {
        name: &'src str,
        start: SourcePosition,
        end: SourcePosition,
    },
    Comment {
        text: &'src str,
        start: SourcePosition,
    },
}

impl<'src> SyntaxNode<'src> {
    pub fn start(&self) -> SourcePosition {
        match *self {
            SyntaxNode::Generic { start, .. }
            | SyntaxNode::FunctionDeclaration { start, .. }
            | SyntaxNode::Comment { start, .. } => start,
        }
    }

    pub fn kind(&self) -> &'src str {
        match *self {
            SyntaxNode::Generic { kind, .. } => kind,
            SyntaxNode::FunctionDeclaration { .. } => FUNCTION_DEFINITION,
            SyntaxNode::Comment { .. } => COMMENT,
        }
    }
}

/// Receives every node of a [`SyntaxTree`] walk.
pub trait Visitor<'src> {
    fn visit(&mut self, node: SyntaxNode<'src>);
}

impl<'src, F> Visitor<'src> for F
where
    F: FnMut(SyntaxNode<'src>),
{
    fn visit(&mut self, node: SyntaxNode<'src>) {
        self(node)
    }
}

/// A successfully parsed script.
pub struct SyntaxTree<'src> {
    source: &'src str,
    tree: Tree,
}

impl<'src> SyntaxTree<'src> {
    /// Parse `source` as bash. Any error or missing node in the resulting
    /// tree fails the whole parse.
    pub fn parse(source: &'src str) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_bash::LANGUAGE.into())
            .map_err(|e| ParseError::Unavailable {
                message: e.to_string(),
            })?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Unavailable {
                message: "no syntax tree produced".to_string(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(first_error(root, source));
        }

        Ok(Self { source, tree })
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Visit every node depth-first, parents before children.
    pub fn walk<V: Visitor<'src>>(&self, visitor: &mut V) {
        let mut cursor = self.tree.walk();
        loop {
            visitor.visit(self.classify(cursor.node()));

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }

    fn classify(&self, node: Node<'_>) -> SyntaxNode<'src> {
        let start = SourcePosition::from_start_point(node.start_position());

        match node.kind() {
            FUNCTION_DEFINITION => {
                if let Some(name) = node
                    .child_by_field_name("name")
                    .and_then(|n| self.text(n))
                    .filter(|name| !name.is_empty())
                {
                    return SyntaxNode::FunctionDeclaration {
                        name,
                        start,
                        end: SourcePosition::from_end_point(node.end_position()),
                    };
                }
            }
            COMMENT => {
                if let Some(text) = self.text(node) {
                    return SyntaxNode::Comment {
                        text: text.trim_end(),
                        start,
                    };
                }
            }
            _ => {}
        }

        let token = node.child_count() == 0
            && self.text(node).is_some_and(|t| !t.trim().is_empty())
            && !closes_multi_line(node);
        SyntaxNode::Generic {
            kind: node.kind(),
            start,
            token,
        }
    }

    fn text(&self, node: Node<'_>) -> Option<&'src str> {
        node.utf8_text(self.source.as_bytes()).ok()
    }
}

/// A leaf of a string or heredoc that starts below its parent's first line,
/// such as the closing `"` of a multi-line string or a heredoc terminator.
fn closes_multi_line(node: Node<'_>) -> bool {
    node.parent().is_some_and(|parent| {
        MULTI_LINE_PARENTS.contains(&parent.kind())
            && parent.start_position().row < node.start_position().row
    })
}

/// Locate the first error or missing node in document order.
fn first_error(root: Node<'_>, source: &str) -> ParseError {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        let position = SourcePosition::from_start_point(node.start_position());

        if node.is_missing() {
            return ParseError::Syntax {
                message: format!("missing `{}`", node.kind()),
                position,
            };
        }
        if node.is_error() {
            let snippet = node
                .utf8_text(source.as_bytes())
                .ok()
                .and_then(|t| t.lines().next())
                .map(str::trim)
                .unwrap_or_default();
            let message = if snippet.is_empty() {
                "syntax error".to_string()
            } else {
                format!("syntax error near `{}`", snippet)
            };
            return ParseError::Syntax { message, position };
        }

        // Only subtrees that contain an error are worth descending into.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return ParseError::Syntax {
                    message: "syntax error".to_string(),
                    position: SourcePosition::from_start_point(root.start_position()),
                };
            }
        }
    }
}
