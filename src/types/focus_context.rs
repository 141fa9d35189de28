use serde::{Deserialize, Serialize};

use super::position::Range;

/// A fully qualified reference: the scope/module that defines the
/// symbol, plus the referenced identifier itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameOccurrence {
    pub source: String,
    pub symbol: String,
}

impl NameOccurrence {
    pub fn new(source: impl Into<String>, symbol: impl Into<String>) -> Self {
        NameOccurrence {
            source: source.into(),
            symbol: symbol.into(),
        }
    }

    /// Combined identifier length, the eviction key when the list is
    /// over its cap.
    pub fn combined_len(&self) -> usize {
        self.source.chars().count() + self.symbol.chars().count()
    }
}

/// Curation output: the surviving entries plus whether the cap forced
/// anything out.
#[derive(Debug, Clone, PartialEq)]
pub struct CuratedList<T> {
    pub entries: Vec<T>,
    pub was_truncated: bool,
}

impl<T> CuratedList<T> {
    pub fn intact(entries: Vec<T>) -> Self {
        CuratedList {
            entries,
            was_truncated: false,
        }
    }

    pub fn truncated(entries: Vec<T>) -> Self {
        CuratedList {
            entries,
            was_truncated: true,
        }
    }
}

/// Fully qualified references that were in use within the focus area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullyQualifiedNames {
    pub used: Vec<NameOccurrence>,
}

/// The curated name lists attached to a focus area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedNames {
    pub simple_names: Vec<String>,
    pub fully_qualified_names: FullyQualifiedNames,
}

/// The final product of an extraction: a trimmed block, its extended
/// variant, the remapped selection, and the curated names.
///
/// Fully self-contained and serializable; the payload uses camelCase
/// field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusAreaContext {
    /// Text of the range of interest after trimming to the budget.
    pub code_block: String,

    /// The trimmed range expanded outward by whole lines toward the
    /// budget.
    pub extended_code_block: String,

    /// The original selection remapped relative to the extended
    /// block's start line. Absent when the input was a pure cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_inside_extended_code_block: Option<Range>,

    pub names: CuratedNames,
}

/// Tunable limits for an extraction.
///
/// Serializable and comparable, with explicit versioned defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Character budget shared by trim and expand.
    pub focus_area_char_limit: usize,
    /// Cap on `simple_names`.
    pub max_simple_names: usize,
    /// Cap on `fully_qualified_names.used`.
    pub max_fully_qualified_names: usize,
}

impl FocusConfig {
    pub fn v0() -> Self {
        FocusConfig {
            focus_area_char_limit: 200,
            max_simple_names: 100,
            max_fully_qualified_names: 25,
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        FocusConfig::v0()
    }
}
