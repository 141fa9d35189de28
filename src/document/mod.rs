pub mod text;
pub mod view;

pub use text::TextDocument;
pub use view::{DocumentView, EditorSnapshot};
