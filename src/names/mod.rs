//! Seam to the language-aware name finder.
//!
//! The finder itself lives outside this crate: given raw text and an
//! extent, it reports which identifiers occur there. This module pins
//! down the shape of its answer so the orchestrator never handles an
//! untyped result. Absence (unsupported language, nothing found) is an
//! explicit `Ok(None)`, not an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::focus_context::NameOccurrence;
use crate::types::position::Range;

/// A raw symbol record as reported by the finder. Only the symbol
/// text matters to curation; the record shape leaves room for finders
/// that attach locations later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolOccurrence {
    pub symbol: String,
}

impl SymbolOccurrence {
    pub fn new(symbol: impl Into<String>) -> Self {
        SymbolOccurrence {
            symbol: symbol.into(),
        }
    }
}

/// Bare identifier occurrences, split by whether they were used or
/// declared within the extent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleNameSets {
    pub used_symbols: Vec<SymbolOccurrence>,
    pub declared_symbols: Vec<SymbolOccurrence>,
}

/// Fully qualified occurrences within the extent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullyQualifiedNameSets {
    pub used_symbols: Vec<NameOccurrence>,
}

/// Everything a finder discovered inside one extent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameSets {
    pub simple: SimpleNameSets,
    pub fully_qualified: FullyQualifiedNameSets,
}

impl NameSets {
    pub fn is_empty(&self) -> bool {
        self.simple.used_symbols.is_empty()
            && self.simple.declared_symbols.is_empty()
            && self.fully_qualified.used_symbols.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum NameFinderError {
    #[error("Name finder failed: {0}")]
    Failed(String),
    #[error("Name finder call was cancelled")]
    Cancelled,
}

/// The external name-finder collaborator.
///
/// Reference finders cover `java`, `javascript`, `javascriptreact`,
/// `typescriptreact`, `python` and `typescript`; any other language id
/// yields `Ok(None)` rather than an error. No timeout is imposed here;
/// callers own cancellation policy and surface it as
/// [`NameFinderError::Cancelled`].
pub trait NameFinder {
    fn find_names(
        &self,
        text: &str,
        extent: Range,
        language_id: &str,
    ) -> Result<Option<NameSets>, NameFinderError>;
}
