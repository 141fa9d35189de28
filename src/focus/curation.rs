use std::collections::{BTreeSet, HashSet};

use crate::names::SymbolOccurrence;
use crate::types::focus_context::{CuratedList, NameOccurrence};

/// Dedup and cap fully qualified references.
///
/// Duplicates by exact `(source, symbol)` pair are dropped, keeping
/// first-seen order. Over the cap, the SHORTEST combined identifiers
/// win: shorter references are cheaper to spend downstream budget on.
pub fn curate_fully_qualified_names(
    occurrences: Vec<NameOccurrence>,
    max: usize,
) -> CuratedList<NameOccurrence> {
    let mut seen = HashSet::new();
    let mut unique: Vec<NameOccurrence> = occurrences
        .into_iter()
        .filter(|occ| seen.insert((occ.source.clone(), occ.symbol.clone())))
        .collect();

    if unique.len() <= max {
        return CuratedList::intact(unique);
    }

    // Stable sort: equal combined lengths keep first-seen order.
    unique.sort_by_key(NameOccurrence::combined_len);
    unique.truncate(max);
    CuratedList::truncated(unique)
}

/// Filter, dedup and cap bare identifiers, used then declared.
///
/// Entries survive when their trimmed text is 2..=128 characters.
/// Under the cap the list passes through untouched, duplicates and
/// all. Over the cap it collapses to a deterministic set first, and if
/// that is still too large the SHORTEST entries are evicted: the
/// opposite policy to fully qualified names, preserved deliberately as
/// a behavior of record.
pub fn curate_simple_names(
    used: &[SymbolOccurrence],
    declared: &[SymbolOccurrence],
    max: usize,
) -> CuratedList<String> {
    let names: Vec<String> = used
        .iter()
        .chain(declared)
        .map(|occ| occ.symbol.trim())
        .filter(|text| {
            let len = text.chars().count();
            (2..=128).contains(&len)
        })
        .map(str::to_string)
        .collect();

    if names.len() <= max {
        return CuratedList::intact(names);
    }

    let mut unique: Vec<String> = names.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    if unique.len() > max {
        unique.sort_by_key(|name| name.chars().count());
        unique = unique.split_off(unique.len() - max);
    }
    CuratedList::truncated(unique)
}
