//! Line-to-function index — which declaration owns each code line.

use crate::extract::{load_code_lines, load_functions};
use crate::model::{CodeLine, FunctionDeclaration, IndexRecord, OUTSIDE_OF_FUNCTION_DECLARATION};
use crate::position::SourcePosition;
use crate::syntax::SyntaxTree;
use anyhow::{Context, Result};
use tracing::info;

/// How to pick the owner of a line that several function ranges contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ContainmentPolicy {
    /// First containing function in start order. An outer function shadows
    /// any function nested inside it.
    #[default]
    FirstMatch,
    /// Containing function with the latest start, i.e. the most deeply
    /// nested one.
    Innermost,
}

/// Everything one indexing run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub functions: Vec<FunctionDeclaration>,
    pub code_lines: Vec<CodeLine>,
    pub records: Vec<IndexRecord>,
}

/// Name of the function owning `pos`, or the outside-of-function sentinel.
///
/// `functions` must be sorted by start position.
pub fn function_name_for_line(
    functions: &[FunctionDeclaration],
    pos: SourcePosition,
    policy: ContainmentPolicy,
) -> &str {
    let mut containing = functions.iter().filter(|f| f.contains(pos));
    let owner = match policy {
        ContainmentPolicy::FirstMatch => containing.next(),
        // Reversed so that equal starts resolve to the earlier entry.
        ContainmentPolicy::Innermost => containing.rev().max_by_key(|f| f.start),
    };
    owner.map_or(OUTSIDE_OF_FUNCTION_DECLARATION, |f| f.name.as_str())
}

/// One record per code line, in code-line order.
pub fn index_lines(
    filename: &str,
    functions: &[FunctionDeclaration],
    code_lines: &[CodeLine],
    policy: ContainmentPolicy,
) -> Vec<IndexRecord> {
    code_lines
        .iter()
        .map(|line| IndexRecord {
            filename: filename.to_string(),
            function: function_name_for_line(functions, line.position, policy).to_string(),
            line: line.line(),
        })
        .collect()
}

/// Parse `source` and build its full index. `filename` is only used to label
/// the records.
pub fn index_source(filename: &str, source: &str, policy: ContainmentPolicy) -> Result<Index> {
    let tree = SyntaxTree::parse(source)
        .with_context(|| format!("failed to parse {}", filename))?;

    let functions = load_functions(&tree);
    let code_lines = load_code_lines(&tree);
    let records = index_lines(filename, &functions, &code_lines, policy);

    info!(
        filename,
        functions = functions.len(),
        code_lines = code_lines.len(),
        "indexed script"
    );

    Ok(Index {
        functions,
        code_lines,
        records,
    })
}
