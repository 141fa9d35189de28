use crate::types::position::Range;

/// Read-only seam over an open document.
///
/// Implemented by whatever hosts the text: an editor buffer adapter in
/// production, [`TextDocument`](super::TextDocument) in-process. Line
/// indices are zero-based and bounded by `[0, line_count)`; character
/// offsets count Unicode scalar values within a line.
pub trait DocumentView {
    /// Full document text.
    fn text(&self) -> &str;

    /// Language identifier, e.g. `"typescript"` or `"python"`.
    fn language_id(&self) -> &str;

    /// Number of lines in the document, always at least 1.
    fn line_count(&self) -> usize;

    /// End-of-line character offset for `line`, i.e. that line's
    /// length excluding the newline.
    fn line_length(&self, line: usize) -> usize;

    /// Text rendered by `range`. Out-of-bounds positions are clamped
    /// to the document, never an error.
    fn text_in_range(&self, range: Range) -> String;
}

/// An immutable capture of editor state at call time.
///
/// Extraction is a pure function of one of these; concurrent
/// extractions over separate snapshots are independent.
#[derive(Debug, Clone, Copy)]
pub struct EditorSnapshot<'a, D> {
    /// The open document, or `None` when the editor has none.
    pub document: Option<&'a D>,
    /// Current selection; `start == end` for a pure cursor.
    pub selection: Range,
    /// Visible viewport ranges, first entry is the primary viewport.
    pub visible_ranges: &'a [Range],
}

impl<'a, D> EditorSnapshot<'a, D> {
    pub fn new(document: Option<&'a D>, selection: Range, visible_ranges: &'a [Range]) -> Self {
        EditorSnapshot {
            document,
            selection,
            visible_ranges,
        }
    }
}
