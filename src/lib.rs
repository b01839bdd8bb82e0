//! bashdoc — a structural index of shell scripts.
//!
//! Parses a script with tree-sitter-bash, finds its function declarations,
//! attaches the comment block directly above each one, and maps every line
//! of executable code to the function that contains it.
//!
//! ```no_run
//! use bashdoc::index::{index_source, ContainmentPolicy};
//!
//! let source = std::fs::read_to_string("deploy.sh")?;
//! let index = index_source("deploy.sh", &source, ContainmentPolicy::FirstMatch)?;
//! for record in &index.records {
//!     println!("{} {}", record.line, record.function);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod associate;
pub mod extract;
pub mod index;
pub mod model;
pub mod position;
pub mod render;
pub mod structure;
pub mod syntax;

pub use associate::{associated_comments, documented_functions, DocumentedFunction};
pub use index::{index_source, ContainmentPolicy, Index};
pub use model::{
    CodeLine, Comment, CommentsByLine, FunctionDeclaration, IndexRecord,
    OUTSIDE_OF_FUNCTION_DECLARATION,
};
pub use position::SourcePosition;
pub use syntax::{ParseError, SyntaxTree};
