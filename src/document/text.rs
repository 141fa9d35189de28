use super::view::DocumentView;
use crate::types::position::{Position, Range};

/// An owned in-memory document.
///
/// The concrete [`DocumentView`] used by tests and by embedders that
/// hold text without a live editor. Lines are split on `\n`; a
/// trailing newline yields a final empty line, matching editor
/// addressing.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDocument {
    language_id: String,
    content: String,
    lines: Vec<String>,
}

impl TextDocument {
    pub fn new(language_id: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let lines = content.split('\n').map(str::to_string).collect();
        TextDocument {
            language_id: language_id.into(),
            content,
            lines,
        }
    }

    /// Position of the end of the last line.
    pub fn end_position(&self) -> Position {
        let last = self.lines.len() - 1;
        Position::new(last, self.lines[last].chars().count())
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len() - 1);
        let character = pos.character.min(self.lines[line].chars().count());
        Position::new(line, character)
    }

    fn line_slice(&self, line: usize, from: usize, to: usize) -> String {
        self.lines[line]
            .chars()
            .skip(from)
            .take(to.saturating_sub(from))
            .collect()
    }
}

impl DocumentView for TextDocument {
    fn text(&self) -> &str {
        &self.content
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_length(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars().count())
    }

    fn text_in_range(&self, range: Range) -> String {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end);
        if end <= start {
            return String::new();
        }

        if start.line == end.line {
            return self.line_slice(start.line, start.character, end.character);
        }

        let mut out = self.line_slice(start.line, start.character, usize::MAX);
        for line in start.line + 1..end.line {
            out.push('\n');
            out.push_str(&self.lines[line]);
        }
        out.push('\n');
        out.push_str(&self.line_slice(end.line, 0, end.character));
        out
    }
}
