pub mod focus_context;
pub mod position;

pub use focus_context::{
    CuratedList, CuratedNames, FocusAreaContext, FocusConfig, FullyQualifiedNames, NameOccurrence,
};
pub use position::{Position, Range};
