use serde::{Deserialize, Serialize};

/// A zero-based location in a document: line, then character offset
/// within that line. Character offsets count Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Position { line, character }
    }
}

/// A span between two positions, `start <= end` in document order.
/// `start == end` denotes a pure cursor with no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Construct a range, swapping the endpoints if given out of order
    /// so the `start <= end` invariant always holds.
    pub fn new(start: Position, end: Position) -> Self {
        if end < start {
            Range { start: end, end: start }
        } else {
            Range { start, end }
        }
    }

    pub fn cursor(at: Position) -> Self {
        Range { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of whole lines touched by the range (at least 1).
    pub fn line_span(&self) -> usize {
        self.end.line - self.start.line + 1
    }
}
