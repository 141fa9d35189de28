//! Budgeted focus-area extraction around an editor cursor.
//!
//! `focus-core` turns an unbounded document plus a point or range of
//! interest into a bounded [`FocusAreaContext`]: a code block trimmed
//! to a character budget, the same block expanded outward line by line
//! toward that budget, and capped, deduplicated lists of identifier
//! names found in the area. All computation is deterministic and a
//! pure function of the editor snapshot passed in.
//!
//! Language-aware symbol discovery and the live editor are external
//! collaborators behind the [`names::NameFinder`] and
//! [`document::DocumentView`] seams.

pub mod document;
pub mod focus;
pub mod names;
pub mod types;

pub use document::{DocumentView, EditorSnapshot, TextDocument};
pub use focus::{ExtractError, FocusAreaExtractor};
pub use types::{FocusAreaContext, FocusConfig};
