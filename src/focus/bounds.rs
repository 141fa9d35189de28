use crate::document::view::DocumentView;
use crate::types::position::{Position, Range};

fn rendered_len(doc: &impl DocumentView, range: Range) -> usize {
    doc.text_in_range(range).chars().count()
}

/// Shrink `range` until its rendered text fits `budget`, removing
/// whole lines from the end. The start never moves.
///
/// Stops once the end cannot move up another whole line: at line 0, or
/// when only the start line remains. The returned range may therefore
/// still exceed the budget when a single line does.
pub fn trim_to_budget(range: Range, budget: usize, doc: &impl DocumentView) -> Range {
    let mut range = range;
    while rendered_len(doc, range) > budget && range.start < range.end {
        if range.end.line == 0 || range.end.line <= range.start.line {
            break;
        }
        let line = range.end.line - 1;
        range.end = Position::new(line, doc.line_length(line));
    }
    range
}

/// Grow `range` by one whole line per step until its rendered text
/// reaches `budget` or the document is exhausted.
///
/// Growth alternates direction, upward first, so the result stays
/// centered on the original point of interest. When one side hits a
/// document boundary the other side keeps growing; a downward step
/// that would address a line past the last one is a stop condition.
pub fn expand_to_budget(range: Range, budget: usize, doc: &impl DocumentView) -> Range {
    let mut range = range;
    let last_line = doc.line_count() - 1;
    let mut prefer_upward = true;

    loop {
        if rendered_len(doc, range) >= budget {
            break;
        }
        if range.start.line == 0 && range.end.line >= last_line {
            break;
        }
        if prefer_upward && range.start.line > 0 {
            range.start = Position::new(range.start.line - 1, 0);
            prefer_upward = false;
        } else {
            if range.end.line >= last_line {
                break;
            }
            let line = range.end.line + 1;
            range.end = Position::new(line, doc.line_length(line));
            prefer_upward = true;
        }
    }
    range
}
