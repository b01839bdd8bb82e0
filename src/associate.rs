//! Attach doc comments to function declarations.

use crate::model::{Comment, CommentsByLine, FunctionDeclaration};

/// A function together with the comment block directly above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentedFunction {
    pub function: FunctionDeclaration,
    pub comments: Vec<Comment>,
}

impl DocumentedFunction {
    /// Comment bodies joined by newlines, `#` markers removed.
    pub fn doc_text(&self) -> String {
        self.comments
            .iter()
            .map(Comment::body)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Collect the unbroken run of comment lines ending on the line right above
/// `function`'s start, top to bottom. A blank or code line ends the run.
pub fn associated_comments(
    function: &FunctionDeclaration,
    comments: &CommentsByLine,
) -> Vec<Comment> {
    let mut block = Vec::new();
    let mut line = function.start.line.saturating_sub(1);

    while line > 0 {
        let Some(comment) = comments.get(&line) else {
            break;
        };
        block.push(comment.clone());
        line -= 1;
    }

    block.reverse();
    block
}

/// Pair every function with its doc comment block, keeping function order.
pub fn documented_functions(
    functions: &[FunctionDeclaration],
    comments: &CommentsByLine,
) -> Vec<DocumentedFunction> {
    functions
        .iter()
        .map(|function| DocumentedFunction {
            function: function.clone(),
            comments: associated_comments(function, comments),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{load_comments, load_functions};
    use crate::position::SourcePosition;
    use crate::syntax::SyntaxTree;

    fn documented(source: &str) -> Vec<DocumentedFunction> {
        let tree = SyntaxTree::parse(source).unwrap();
        documented_functions(&load_functions(&tree), &load_comments(&tree))
    }

    fn texts(doc: &DocumentedFunction) -> Vec<&str> {
        doc.comments.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn comment_directly_above_is_attached() {
        let docs = documented("# does a thing\ndo_thing() { :; }\n");
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].function.name, "do_thing");
        assert_eq!(texts(&docs[0]), vec!["# does a thing"]);
    }

    #[test]
    fn blank_line_breaks_the_block() {
        let docs = documented("# unrelated\n\ndo_thing() { :; }\n");
        assert!(docs[0].comments.is_empty());
    }

    #[test]
    fn block_is_top_to_bottom_and_stops_at_gap() {
        let source = "\
# file header

# first line
# second line
# third line
work() {
  :
}
";
        let docs = documented(source);
        assert_eq!(
            texts(&docs[0]),
            vec!["# first line", "# second line", "# third line"]
        );
        assert_eq!(docs[0].doc_text(), "first line\nsecond line\nthird line");
    }

    #[test]
    fn code_line_breaks_the_block() {
        let docs = documented("# about x\nx=1\ny() { :; }\n");
        assert!(docs[0].comments.is_empty());
    }

    #[test]
    fn function_on_first_line_has_no_block() {
        let f = FunctionDeclaration {
            name: "first".to_string(),
            start: SourcePosition::new(1, 1),
            end: SourcePosition::new(1, 12),
        };
        let mut comments = CommentsByLine::new();
        comments.insert(
            1,
            Comment {
                text: "# same line".to_string(),
                position: SourcePosition::new(1, 14),
            },
        );
        assert!(associated_comments(&f, &comments).is_empty());
    }

    #[test]
    fn block_reaches_line_one() {
        let docs = documented("# one\n# two\nf() { :; }\n");
        assert_eq!(texts(&docs[0]), vec!["# one", "# two"]);
    }

    #[test]
    fn nested_function_gets_its_own_block() {
        let source = "\
# outer docs
outer() {
  # inner docs
  inner() { :; }
}
";
        let docs = documented(source);
        assert_eq!(docs[0].function.name, "outer");
        assert_eq!(texts(&docs[0]), vec!["# outer docs"]);
        assert_eq!(docs[1].function.name, "inner");
        assert_eq!(texts(&docs[1]), vec!["# inner docs"]);
    }
}
