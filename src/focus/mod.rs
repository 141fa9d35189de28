pub mod bounds;
pub mod curation;

use thiserror::Error;

use crate::document::view::{DocumentView, EditorSnapshot};
use crate::names::{NameFinder, NameFinderError, NameSets};
use crate::types::focus_context::{
    CuratedNames, FocusAreaContext, FocusConfig, FullyQualifiedNames,
};
use crate::types::position::{Position, Range};

pub use bounds::{expand_to_budget, trim_to_budget};
pub use curation::{curate_fully_qualified_names, curate_simple_names};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Name finder error: {0}")]
    NameFinder(#[from] NameFinderError),
}

/// Orchestrates one extraction: resolve the range of interest, ask the
/// finder, curate, trim, expand, assemble.
pub struct FocusAreaExtractor<F> {
    finder: F,
    config: FocusConfig,
}

impl<F> FocusAreaExtractor<F>
where
    F: NameFinder,
{
    pub fn new(finder: F, config: FocusConfig) -> Self {
        Self { finder, config }
    }

    pub fn with_defaults(finder: F) -> Self {
        Self::new(finder, FocusConfig::v0())
    }

    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    /// Extract a focus area from the given editor snapshot.
    ///
    /// Returns `Ok(None)` when no document is open. A finder failure
    /// fails the whole extraction; a finder that finds nothing
    /// activates the code-block fallback instead.
    pub fn extract<D: DocumentView>(
        &self,
        editor: &EditorSnapshot<'_, D>,
    ) -> Result<Option<FocusAreaContext>, ExtractError> {
        let Some(doc) = editor.document else {
            return Ok(None);
        };

        let selection = editor.selection;
        let interest = if selection.is_empty() {
            editor.visible_ranges.first().copied().unwrap_or(selection)
        } else {
            selection
        };

        let found = self
            .finder
            .find_names(doc.text(), interest, doc.language_id())?
            .unwrap_or_else(NameSets::default);

        let fqns =
            curate_fully_qualified_names(found.fully_qualified.used_symbols, self.config.max_fully_qualified_names);
        let simple = curate_simple_names(
            &found.simple.used_symbols,
            &found.simple.declared_symbols,
            self.config.max_simple_names,
        );

        let budget = self.config.focus_area_char_limit;
        let trimmed = trim_to_budget(interest, budget, doc);
        let code_block = doc.text_in_range(trimmed);

        let extended = expand_to_budget(trimmed, budget, doc);
        let extended_code_block = doc.text_in_range(extended);

        let mut simple_names = simple.entries;
        if simple_names.is_empty() && fqns.entries.is_empty() {
            // Downstream always needs at least one name signal.
            simple_names.push(code_block.clone());
        }

        let selection_inside_extended_code_block = (!selection.is_empty())
            .then(|| remap_into(selection, extended.start.line));

        Ok(Some(FocusAreaContext {
            code_block,
            extended_code_block,
            selection_inside_extended_code_block,
            names: CuratedNames {
                simple_names,
                fully_qualified_names: FullyQualifiedNames { used: fqns.entries },
            },
        }))
    }
}

/// Shift a selection's lines so they are relative to the extended
/// block's first line. Character offsets are untouched.
fn remap_into(selection: Range, extended_start_line: usize) -> Range {
    let shift = |pos: Position| {
        Position::new(pos.line.saturating_sub(extended_start_line), pos.character)
    };
    Range::new(shift(selection.start), shift(selection.end))
}
