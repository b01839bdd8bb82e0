//! Source positions — 1-based line and byte column.

use std::fmt;

/// A point in the script source.
///
/// Ordering is by line, then column, so ranges of positions can be compared
/// directly with `<`, `==` and `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Convert a tree-sitter start point (0-based row and column).
    pub fn from_start_point(point: tree_sitter::Point) -> Self {
        Self::new(point.row + 1, point.column + 1)
    }

    /// Convert a tree-sitter end point, which is exclusive, into the
    /// position of the last character it covers.
    pub fn from_end_point(point: tree_sitter::Point) -> Self {
        Self::new(point.row + 1, point.column.max(1))
    }

    /// `true` when `self` lies within `[start, end]`, bounds included.
    pub fn is_within(self, start: SourcePosition, end: SourcePosition) -> bool {
        self == start || self == end || (self > start && end > self)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_line_then_column() {
        let mut positions = vec![
            SourcePosition::new(3, 1),
            SourcePosition::new(1, 9),
            SourcePosition::new(1, 2),
            SourcePosition::new(2, 5),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                SourcePosition::new(1, 2),
                SourcePosition::new(1, 9),
                SourcePosition::new(2, 5),
                SourcePosition::new(3, 1),
            ]
        );
    }

    #[test]
    fn equality_needs_both_fields() {
        assert_eq!(SourcePosition::new(4, 2), SourcePosition::new(4, 2));
        assert_ne!(SourcePosition::new(4, 2), SourcePosition::new(4, 3));
        assert_ne!(SourcePosition::new(4, 2), SourcePosition::new(5, 2));
    }

    #[test]
    fn within_includes_both_bounds() {
        let start = SourcePosition::new(10, 1);
        let end = SourcePosition::new(20, 1);
        assert!(start.is_within(start, end));
        assert!(end.is_within(start, end));
        assert!(SourcePosition::new(15, 40).is_within(start, end));
        assert!(!SourcePosition::new(9, 80).is_within(start, end));
        assert!(!SourcePosition::new(20, 2).is_within(start, end));
    }

    #[test]
    fn converts_tree_sitter_points() {
        let start = tree_sitter::Point { row: 0, column: 0 };
        assert_eq!(SourcePosition::from_start_point(start), SourcePosition::new(1, 1));

        // `}` at 0-based (2, 0) ends at exclusive (2, 1)
        let end = tree_sitter::Point { row: 2, column: 1 };
        assert_eq!(SourcePosition::from_end_point(end), SourcePosition::new(3, 1));
    }

    #[test]
    fn displays_as_line_colon_column() {
        assert_eq!(SourcePosition::new(7, 3).to_string(), "7:3");
    }
}
